//! Subcommand implementations.
//!
//! Page keys are kept as plain strings: the CLI has no page registry, so any
//! key is accepted and printed back.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use waypoint_core::{
    HostLocation, Location, MemoryHistory, NavigationTarget, Resolution, RouteConfig, RouteTable,
    Router,
};

pub struct ResolveOptions {
    pub url: bool,
    pub strict: bool,
}

/// Read and parse a route-table file.
pub fn load(path: &Path) -> Result<RouteConfig> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = RouteConfig::from_toml(&src)
        .with_context(|| format!("invalid route config {}", path.display()))?;
    debug!(file = %path.display(), entries = config.routes.len(), "config loaded");
    Ok(config)
}

fn table(config: &RouteConfig) -> Result<RouteTable<String>> {
    Ok(config.build_table(|page| Some(page.to_string()))?)
}

pub fn check(config: &RouteConfig, out: &mut impl Write) -> Result<()> {
    let table = table(config)?;
    let disabled = config.routes.len() - config.enabled_routes().count();
    writeln!(
        out,
        "ok: {} routes ({} disabled), {} history",
        table.len(),
        disabled,
        config.router.mode.label()
    )?;
    Ok(())
}

pub fn routes(config: &RouteConfig, out: &mut impl Write) -> Result<()> {
    let table = table(config)?;
    for route in table.iter() {
        writeln!(
            out,
            "{:<24} {:<16} {}",
            route.path(),
            route.name().unwrap_or("-"),
            route.page()
        )?;
    }
    Ok(())
}

pub fn resolve(
    config: &RouteConfig,
    locations: &[String],
    options: ResolveOptions,
    out: &mut impl Write,
) -> Result<()> {
    let table = table(config)?;
    let mut missing = 0;

    for input in locations {
        let location = if options.url {
            config.router.mode.read(&HostLocation::parse(input))
        } else {
            Location::parse(input)
        };
        match table.resolve(location.path()) {
            Resolution::Matched { route, params } => {
                write!(out, "{} -> {}", location, route.page())?;
                if let Some(name) = route.name() {
                    write!(out, " ({})", name)?;
                }
                for (key, value) in params.iter() {
                    write!(out, " {}={}", key, value)?;
                }
                writeln!(out)?;
            }
            Resolution::NotFound => {
                missing += 1;
                writeln!(out, "{} -> not found", location)?;
            }
        }
    }

    if options.strict && missing > 0 {
        bail!("{} location(s) not found", missing);
    }
    Ok(())
}

pub fn href(
    config: &RouteConfig,
    name: &str,
    params: &[String],
    query: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let mut target = NavigationTarget::named(name);
    for pair in params {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("parameter '{}' is not KEY=VALUE", pair);
        };
        target = target.param(key, value);
    }
    if let Some(query) = query {
        target = target.query(query);
    }

    let router = Router::new(table(config)?, config.router.clone(), MemoryHistory::default());
    writeln!(out, "{}", router.href(target)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [history]
        mode = "path"
        base = "/app"

        [[routes]]
        path = "/"
        name = "Home"
        page = "home"

        [[routes]]
        path = "/users/:id"
        name = "User"
        page = "user"

        [[routes]]
        path = "/slots"
        page = "slots"
        enabled = false
    "#;

    fn run(f: impl FnOnce(&RouteConfig, &mut Vec<u8>) -> Result<()>) -> Result<String> {
        let config = RouteConfig::from_toml(CONFIG).unwrap();
        let mut out = Vec::new();
        f(&config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check() {
        let out = run(|c, o| check(c, o)).unwrap();
        assert_eq!(out, "ok: 2 routes (1 disabled), path history\n");
    }

    #[test]
    fn test_routes_lists_in_order() {
        let out = run(|c, o| routes(c, o)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("/ "));
        assert!(lines[1].contains("/users/:id") && lines[1].ends_with("user"));
    }

    #[test]
    fn test_resolve() {
        let locations = vec!["/users/7".to_string(), "/slots".to_string()];
        let out = run(|c, o| {
            resolve(c, &locations, ResolveOptions { url: false, strict: false }, o)
        })
        .unwrap();
        assert_eq!(out, "/users/7 -> user (User) id=7\n/slots -> not found\n");

        let strict = run(|c, o| {
            resolve(c, &locations, ResolveOptions { url: false, strict: true }, o)
        });
        assert!(strict.is_err());
    }

    #[test]
    fn test_resolve_urls() {
        let locations = vec!["/app/users/3?x=1".to_string()];
        let out = run(|c, o| {
            resolve(c, &locations, ResolveOptions { url: true, strict: true }, o)
        })
        .unwrap();
        assert_eq!(out, "/users/3?x=1 -> user (User) id=3\n");
    }

    #[test]
    fn test_href() {
        let params = vec!["id=42".to_string()];
        let out = run(|c, o| href(c, "User", &params, Some("tab=2".to_string()), o)).unwrap();
        assert_eq!(out, "/app/users/42?tab=2\n");

        assert!(run(|c, o| href(c, "User", &[], None, o)).is_err());
        assert!(run(|c, o| href(c, "User", &["id".to_string()], None, o)).is_err());
    }
}
