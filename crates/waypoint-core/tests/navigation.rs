//! End-to-end navigation over in-memory history, covering both addressing modes.

use waypoint_core::{
    HistoryBackend, HistoryMode, MemoryHistory, NavigateOptions, NavigationOutcome, Resolution, Route,
    RouteConfig, RouteTable, Router, RouterConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Home,
    Countdown,
    Slots,
}

fn page(key: &str) -> Option<Page> {
    match key {
        "home" => Some(Page::Home),
        "countdown" => Some(Page::Countdown),
        "slots" => Some(Page::Slots),
        _ => None,
    }
}

#[test]
fn countdown_resolves_to_countdown() {
    let table = RouteTable::new(vec![
        Route::new("/", Page::Home).unwrap(),
        Route::new("/countdown", Page::Countdown).unwrap(),
    ])
    .unwrap();
    assert_eq!(table.resolve("/countdown").page(), Some(&Page::Countdown));
}

#[test]
fn missing_path_is_not_found() {
    let table = RouteTable::new(vec![
        Route::new("/", Page::Home).unwrap(),
        Route::new("/slots", Page::Slots).unwrap(),
    ])
    .unwrap();
    assert_eq!(table.resolve("/missing"), Resolution::NotFound);
}

#[test]
fn back_without_prior_navigation_stays_home() {
    let table = RouteTable::new(vec![Route::new("/", Page::Home).unwrap()]).unwrap();
    let mut router = Router::new(table, RouterConfig::default(), MemoryHistory::default());

    assert_eq!(
        router.navigate("/", NavigateOptions::PUSH),
        Ok(NavigationOutcome::Unchanged)
    );
    let before = router.state().clone();
    assert!(!router.back());
    assert_eq!(router.state(), &before);
    assert_eq!(router.state().page(), Some(&Page::Home));
}

#[test]
fn addressing_mode_does_not_change_resolution() {
    let routes = || {
        RouteTable::new(vec![
            Route::named("/", "Home", Page::Home).unwrap(),
            Route::named("/countdown", "Countdown", Page::Countdown).unwrap(),
            Route::new("/slots", Page::Slots).unwrap(),
        ])
        .unwrap()
    };
    let hash = Router::new(
        routes(),
        RouterConfig::default(),
        MemoryHistory::new("/index.html#/slots"),
    );
    let path = Router::new(
        routes(),
        RouterConfig {
            mode: HistoryMode::path("/game"),
            ..RouterConfig::default()
        },
        MemoryHistory::new("/game/slots"),
    );

    assert_eq!(hash.state().location(), path.state().location());
    assert_eq!(hash.state().page(), path.state().page());
    assert_eq!(hash.href("/countdown").unwrap(), "#/countdown");
    assert_eq!(path.href("/countdown").unwrap(), "/game/countdown");
}

#[test]
fn path_mode_walks_history() {
    let table = RouteTable::new(vec![
        Route::new("/", Page::Home).unwrap(),
        Route::new("/countdown", Page::Countdown).unwrap(),
        Route::new("/slots", Page::Slots).unwrap(),
    ])
    .unwrap();
    let config = RouterConfig {
        mode: HistoryMode::path("/"),
        ..RouterConfig::default()
    };
    let mut router = Router::new(table, config, MemoryHistory::default());

    router.navigate("/countdown", NavigateOptions::PUSH).unwrap();
    router.navigate("/slots", NavigateOptions::PUSH).unwrap();
    assert_eq!(router.history().location().pathname, "/slots");

    assert!(router.back());
    assert!(router.back());
    assert_eq!(router.state().page(), Some(&Page::Home));
    assert!(!router.back());

    router.navigate("/slots", NavigateOptions::PUSH).unwrap();
    assert!(!router.forward());
    assert_eq!(router.history().len(), 2);
}

#[test]
fn bundled_style_config_drives_router() {
    let src = r#"
        [history]
        mode = "hash"

        [[routes]]
        path = "/"
        name = "Home"
        page = "home"

        [[routes]]
        path = "/countdown"
        name = "Countdown"
        page = "countdown"

        [[routes]]
        path = "/slots"
        page = "slots"
    "#;
    let config = RouteConfig::from_toml(src).unwrap();
    let table = config.build_table(page).unwrap();
    let mut router = Router::new(table, config.router, MemoryHistory::default());

    router
        .navigate(
            waypoint_core::NavigationTarget::named("Countdown"),
            NavigateOptions::PUSH,
        )
        .unwrap();
    assert_eq!(router.state().page(), Some(&Page::Countdown));

    router.navigate("/slots", NavigateOptions::PUSH).unwrap();
    assert_eq!(router.state().page(), Some(&Page::Slots));
    assert_eq!(router.state().route_name(), None);
}
