//! Resolution properties over generated flat route tables.

use proptest::prelude::*;
use waypoint_core::{HistoryMode, HostLocation, Location, Route, RouteTable};

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

/// Distinct literal paths, never `/` itself.
fn literal_paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(segment(), 1..8)
        .prop_map(|set| set.into_iter().map(|s| format!("/{}", s)).collect())
}

/// Arbitrary location input: unstructured strings, URL-ish noise, and
/// registered paths with noise appended.
fn raw_input(paths: Vec<String>) -> impl Strategy<Value = String> {
    let noise = "[a-z/?#%é=&.]{0,16}";
    prop_oneof![
        any::<String>(),
        "/?[a-zé%/?#]{0,24}",
        (prop::sample::select(paths), noise).prop_map(|(p, n)| format!("{}{}", p, n)),
    ]
}

fn table_for(paths: &[String]) -> RouteTable<usize> {
    let mut routes = vec![Route::new("/", 0).unwrap()];
    routes.extend(
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| Route::new(p, i + 1).unwrap()),
    );
    RouteTable::new(routes).unwrap()
}

proptest! {
    #[test]
    fn registered_paths_resolve_to_themselves(paths in literal_paths()) {
        let table = table_for(&paths);
        for path in &paths {
            let route = table.resolve(path).route().cloned();
            prop_assert_eq!(route.map(|r| r.path()), Some(path.clone()));
        }
        prop_assert_eq!(table.resolve("/").page(), Some(&0));
    }

    #[test]
    fn unregistered_paths_are_not_found(paths in literal_paths(), other in segment()) {
        let table = table_for(&paths);
        let other = format!("/{}", other);
        prop_assume!(!paths.contains(&other));
        prop_assert!(!table.resolve(&other).is_found());
    }

    #[test]
    fn removing_a_route_only_affects_that_path(paths in literal_paths(), pick in any::<prop::sample::Index>()) {
        let mut table = table_for(&paths);
        let removed = pick.get(&paths).clone();
        table.remove(&removed).unwrap();

        prop_assert!(!table.resolve(&removed).is_found());
        for path in paths.iter().filter(|p| **p != removed) {
            prop_assert!(table.resolve(path).is_found());
        }
        prop_assert!(table.resolve("/").is_found());
    }

    #[test]
    fn hash_and_path_modes_agree(paths in literal_paths(), pick in any::<prop::sample::Index>()) {
        let table = table_for(&paths);
        let target = Location::parse(pick.get::<String>(&paths));

        let hash = HistoryMode::Hash;
        let path = HistoryMode::path("/base");
        let via_hash = hash.read(&HostLocation::parse("/").join(&hash.href(&target)));
        let via_path = path.read(&HostLocation::parse(&path.href(&target)));

        prop_assert_eq!(&via_hash, &via_path);
        prop_assert_eq!(table.resolve(via_hash.path()).page(), table.resolve(via_path.path()).page());
    }

    #[test]
    fn arbitrary_input_resolves_only_to_its_own_path(
        (paths, input) in literal_paths().prop_flat_map(|paths| (Just(paths.clone()), raw_input(paths)))
    ) {
        let table = table_for(&paths);
        let normalized = Location::parse(&input).path().to_string();
        match table.resolve(&input).route() {
            Some(route) => prop_assert_eq!(route.path(), normalized),
            None => {
                prop_assert!(!paths.contains(&normalized));
                prop_assert_ne!(normalized.as_str(), "/");
            }
        }
    }
}
