//! Property tests for selection and batch dispatch.

use proptest::prelude::*;

use appfleet::domain::entities::{Registry, Target};
use appfleet::domain::ports::NoopEventSink;
use appfleet::domain::services::Dispatcher;
use appfleet::{FleetError, Selection};

fn app_names(min: usize) -> impl Strategy<Value = Vec<String>> {
    let name = proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap();
    proptest::collection::btree_set(name, min..=6).prop_map(|set| set.into_iter().collect())
}

fn registry(names: &[String]) -> Registry {
    Registry::new(
        names
            .iter()
            .map(|n| Target::new(n.as_str(), format!("{n}-app"), "heroku.com")),
    )
}

fn visit(registry: &Registry, selection: Selection) -> Result<Vec<String>, FleetError> {
    let events = NoopEventSink;
    let dispatcher = Dispatcher::new(registry, &events);
    let mut visited = Vec::new();
    dispatcher.for_each_selected(selection, |target| {
        visited.push(target.name().to_string());
        Ok(())
    })?;
    Ok(visited)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every selected target is visited once, in first-mention order.
    #[test]
    fn property_selection_order_is_preserved(
        (names, picks) in app_names(1).prop_flat_map(|names| {
            let len = names.len();
            (Just(names), proptest::collection::vec(0..len, 1..12))
        })
    ) {
        let registry = registry(&names);
        let mut selection = Selection::new();
        let mut expected: Vec<String> = Vec::new();
        for i in picks {
            selection.select(&registry, &names[i]).unwrap();
            if !expected.contains(&names[i]) {
                expected.push(names[i].clone());
            }
        }

        prop_assert_eq!(visit(&registry, selection).unwrap(), expected);
    }

    /// PROPERTY: `select_all` visits the registry in configuration order.
    #[test]
    fn property_select_all_follows_registry_order(names in app_names(1)) {
        let registry = registry(&names);
        let mut selection = Selection::new();
        selection.select_all(&registry);

        prop_assert_eq!(visit(&registry, selection).unwrap(), names);
    }

    /// PROPERTY: with several apps, an empty selection runs nothing.
    #[test]
    fn property_empty_selection_with_many_apps_runs_nothing(names in app_names(2)) {
        let registry = registry(&names);
        let events = NoopEventSink;
        let dispatcher = Dispatcher::new(&registry, &events);

        let mut calls = 0;
        let result = dispatcher.for_each_selected(Selection::new(), |_| {
            calls += 1;
            Ok(())
        });

        prop_assert!(matches!(result, Err(FleetError::NoTargetsSelected)));
        prop_assert_eq!(calls, 0);
    }

    /// PROPERTY: a lone app is the same target whether named or implied.
    #[test]
    fn property_sole_app_is_implied(names in app_names(1).prop_map(|mut n| { n.truncate(1); n })) {
        let registry = registry(&names);
        let mut explicit = Selection::new();
        explicit.select(&registry, &names[0]).unwrap();

        prop_assert_eq!(
            visit(&registry, Selection::new()).unwrap(),
            visit(&registry, explicit).unwrap()
        );
    }

    /// PROPERTY: names outside the registry are rejected before dispatch.
    #[test]
    fn property_unknown_names_are_rejected(names in app_names(1), stranger in "[A-Z]{1,6}") {
        let registry = registry(&names);
        let mut selection = Selection::new();

        let err = selection.select(&registry, &stranger).unwrap_err();

        let is_unknown = matches!(err, FleetError::UnknownTarget { ref name, .. } if *name == stranger);
        prop_assert!(is_unknown);
        prop_assert!(selection.is_empty());
    }
}
