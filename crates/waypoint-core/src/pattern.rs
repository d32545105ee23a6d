//! Route path patterns.
//!
//! A pattern is a `/`-separated list of segments:
//!
//! | Syntax    | Segment                | Matches                         |
//! |-----------|------------------------|---------------------------------|
//! | `slots`   | literal                | exactly `slots`                 |
//! | `:id`     | parameter              | any one non-empty segment       |
//! | `:id?`    | optional parameter     | zero or one segment (last only) |
//! | `:rest*`  | catch-all parameter    | all remaining segments (last only) |
//!
//! Empty segments are ignored on both sides, so `/countdown/` and
//! `/countdown` are the same pattern and match the same paths.

use std::fmt;

use crate::error::{ParamError, PatternError};
use crate::route::Params;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Optional(String),
    CatchAll(String),
}

/// A parsed route path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a route path such as `/users/:id`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let parts: Vec<&str> = split_segments(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());
        let mut seen: Vec<&str> = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            let Some(spec) = part.strip_prefix(':') else {
                segments.push(Segment::Literal((*part).to_string()));
                continue;
            };

            let (name, segment_fn): (&str, fn(String) -> Segment) =
                if let Some(name) = spec.strip_suffix('?') {
                    (name, Segment::Optional)
                } else if let Some(name) = spec.strip_suffix('*') {
                    (name, Segment::CatchAll)
                } else {
                    (spec, Segment::Param)
                };

            if name.is_empty() {
                return Err(PatternError::EmptyParamName(raw.to_string()));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(PatternError::InvalidParamName {
                    pattern: raw.to_string(),
                    name: name.to_string(),
                });
            }
            if seen.contains(&name) {
                return Err(PatternError::RepeatedParam {
                    pattern: raw.to_string(),
                    name: name.to_string(),
                });
            }
            seen.push(name);

            let segment = segment_fn(name.to_string());
            if matches!(segment, Segment::Optional(_) | Segment::CatchAll(_)) && i + 1 != parts.len()
            {
                return Err(PatternError::TrailingOnly(raw.to_string()));
            }
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    /// True for the root pattern `/`.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the pattern has no parameters.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Names of all parameters, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Literal(_) => None,
            Segment::Param(n) | Segment::Optional(n) | Segment::CatchAll(n) => Some(n.as_str()),
        })
    }

    /// Match a normalized location path, returning the captured parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        let mut params = Params::new();
        let mut consumed = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if parts.get(consumed) != Some(&lit.as_str()) {
                        return None;
                    }
                    consumed += 1;
                }
                Segment::Param(name) => {
                    let value = parts.get(consumed)?;
                    params.insert(name.clone(), (*value).to_string());
                    consumed += 1;
                }
                Segment::Optional(name) => {
                    if let Some(value) = parts.get(consumed) {
                        params.insert(name.clone(), (*value).to_string());
                        consumed += 1;
                    }
                }
                Segment::CatchAll(name) => {
                    params.insert(name.clone(), parts[consumed..].join("/"));
                    consumed = parts.len();
                }
            }
        }

        (consumed == parts.len()).then_some(params)
    }

    /// Build a concrete path from parameter values.
    ///
    /// Values are inserted as-is, so anything that would not match back to
    /// the same value is rejected: `?` or `#` anywhere, `/` outside a
    /// catch-all, empty segments inside a catch-all. An empty required
    /// parameter counts as missing.
    pub fn build(&self, params: &Params) -> Result<String, ParamError> {
        let mut out = String::new();
        for segment in &self.segments {
            let value = match segment {
                Segment::Literal(lit) => Some(lit.as_str()),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| ParamError::Missing(name.clone()))?;
                    check_value(name, value, false)?;
                    Some(value)
                }
                Segment::Optional(name) | Segment::CatchAll(name) => {
                    let catch_all = matches!(segment, Segment::CatchAll(_));
                    match params.get(name).filter(|v| !v.is_empty()) {
                        Some(value) => {
                            check_value(name, value, catch_all)?;
                            Some(value)
                        }
                        None => None,
                    }
                }
            };
            if let Some(value) = value {
                out.push('/');
                out.push_str(value);
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Ok(out)
    }

    /// True if both patterns match exactly the same paths.
    ///
    /// Parameter names are ignored: `/users/:id` and `/users/:uid` are the
    /// same shape.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Literal(x), Segment::Literal(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_))
                    | (Segment::Optional(_), Segment::Optional(_))
                    | (Segment::CatchAll(_), Segment::CatchAll(_)) => true,
                    _ => false,
                })
    }
}

fn check_value(name: &str, value: &str, allow_slash: bool) -> Result<(), ParamError> {
    let bad_char = value.contains(['?', '#']) || (!allow_slash && value.contains('/'));
    let empty_segment = allow_slash && value.split('/').any(str::is_empty);
    if bad_char || empty_segment {
        return Err(ParamError::Invalid {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => write!(f, "/{}", lit)?,
                Segment::Param(name) => write!(f, "/:{}", name)?,
                Segment::Optional(name) => write!(f, "/:{}?", name)?,
                Segment::CatchAll(name) => write!(f, "/:{}*", name)?,
            }
        }
        Ok(())
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: &str) -> RoutePattern {
        RoutePattern::parse(raw).unwrap()
    }

    #[test]
    fn test_literal_patterns() {
        assert!(p("/").is_root());
        assert!(p("/").matches("/").is_some());
        assert!(p("/countdown").matches("/countdown").is_some());
        assert!(p("/countdown").matches("/countdown/").is_some());
        assert!(p("/countdown").matches("/").is_none());
        assert!(p("/countdown").matches("/countdown/extra").is_none());
        assert!(p("/").matches("/countdown").is_none());
        // Case-sensitive
        assert!(p("/slots").matches("/Slots").is_none());
    }

    #[test]
    fn test_param_capture() {
        let params = p("/users/:id/posts/:post").matches("/users/7/posts/hello").unwrap();
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("post"), Some("hello"));
        assert!(p("/users/:id").matches("/users").is_none());
    }

    #[test]
    fn test_optional_and_catch_all() {
        let opt = p("/slots/:machine?");
        assert!(opt.matches("/slots").unwrap().get("machine").is_none());
        assert_eq!(opt.matches("/slots/lucky7").unwrap().get("machine"), Some("lucky7"));

        let rest = p("/docs/:rest*");
        assert_eq!(rest.matches("/docs").unwrap().get("rest"), Some(""));
        assert_eq!(rest.matches("/docs/a/b/c").unwrap().get("rest"), Some("a/b/c"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RoutePattern::parse("countdown"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/users/:"),
            Err(PatternError::EmptyParamName(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/users/:id-x"),
            Err(PatternError::InvalidParamName { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/a/:rest*/b"),
            Err(PatternError::TrailingOnly(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/:id/:id"),
            Err(PatternError::RepeatedParam { .. })
        ));
    }

    #[test]
    fn test_display_normalizes() {
        assert_eq!(p("/").to_string(), "/");
        assert_eq!(p("/countdown/").to_string(), "/countdown");
        assert_eq!(p("//a//:b?").to_string(), "/a/:b?");
    }

    #[test]
    fn test_build() {
        let mut params = Params::new();
        params.insert("id", "42");
        assert_eq!(p("/users/:id").build(&params).unwrap(), "/users/42");
        assert_eq!(p("/users/:id/:tab?").build(&params).unwrap(), "/users/42");
        assert_eq!(p("/").build(&Params::new()).unwrap(), "/");
        assert_eq!(
            p("/users/:id").build(&Params::new()),
            Err(ParamError::Missing("id".to_string()))
        );
    }

    #[test]
    fn test_build_rejects_values_that_do_not_round_trip() {
        let users = p("/users/:id");
        for value in ["a/b", "x?y", "q#r"] {
            let params: Params = [("id", value)].into_iter().collect();
            assert_eq!(
                users.build(&params),
                Err(ParamError::Invalid {
                    name: "id".to_string(),
                    value: value.to_string(),
                })
            );
        }

        let empty: Params = [("id", "")].into_iter().collect();
        assert_eq!(users.build(&empty), Err(ParamError::Missing("id".to_string())));

        // Percent signs pass through and match back unchanged
        let pct: Params = [("id", "50%")].into_iter().collect();
        let path = users.build(&pct).unwrap();
        assert_eq!(users.matches(&path).unwrap().get("id"), Some("50%"));

        let rest = p("/docs/:rest*");
        let nested: Params = [("rest", "a/b")].into_iter().collect();
        assert_eq!(rest.build(&nested).unwrap(), "/docs/a/b");
        for value in ["a//b", "/a", "a?b"] {
            let params: Params = [("rest", value)].into_iter().collect();
            assert!(matches!(rest.build(&params), Err(ParamError::Invalid { .. })));
        }
    }

    #[test]
    fn test_same_shape_ignores_param_names() {
        assert!(p("/users/:id").same_shape(&p("/users/:uid")));
        assert!(p("/docs/:a*").same_shape(&p("/docs/:b*/")));
        assert!(!p("/users/:id").same_shape(&p("/users/:id?")));
        assert!(!p("/users/:id").same_shape(&p("/users/me")));
        assert!(!p("/users").same_shape(&p("/users/:id")));
    }
}
