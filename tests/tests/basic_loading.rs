//! Batch loading integration tests.
//!
//! Staging/commit discipline of `run_load` against in-memory gateways,
//! including the classic two-item test-entity scenario.

use seedling_tests::prelude::*;

mod batch_commit {
    use super::*;

    #[test]
    fn test_full_test_entity_scenario() {
        // GIVEN the classic fixture: two items, overridden currency and
        // friend mutators, pets treated as a single value
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = MemoryGateway::new();
        let items = vec![
            item! {
                "name" => "Foo",
                "roles" => vec!["foo"],
                "currencies" => vec!["CHF", "EUR"],
                "friends" => vec!["Anna", "Ben"],
                "pets" => vec!["Dog", "Cat", "Fish"],
            },
            item! { "name" => "Bar" },
        ];
        let overrides = DispatchOverrides::new()
            .mutator("currencies", "addCurrency")
            .mutator("friends", "customNewFriendSetter")
            .singular("pets");

        // WHEN
        let staged = loader
            .run_load_with(&items, &mut gateway, &overrides)
            .unwrap();

        // THEN two entities were staged and committed in one flush
        assert_eq!(staged, 2);
        assert_eq!(gateway.committed().len(), 2);
        assert_eq!(gateway.commit_count(), 1);

        let first = &gateway.committed()[0];
        assert_eq!(first.get("name"), Some(&Value::String("Foo".into())));
        assert_eq!(
            first.get("role"),
            Some(&Value::List(vec![Value::String("foo".into())]))
        );
        assert_eq!(
            first.get("currency"),
            Some(&Value::List(vec![
                Value::String("CHF".into()),
                Value::String("EUR".into())
            ]))
        );
        assert_eq!(
            first.get("friends"),
            Some(&Value::List(vec![
                Value::String("Anna".into()),
                Value::String("Ben".into())
            ]))
        );
        // pets arrived as one assignment of the whole list
        assert_eq!(
            first.get("pets"),
            Some(&Value::List(vec![
                Value::String("Dog".into()),
                Value::String("Cat".into()),
                Value::String("Fish".into())
            ]))
        );

        let second = &gateway.committed()[1];
        assert_eq!(second.get("name"), Some(&Value::String("Bar".into())));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_one_entity_per_item_commit_after_last_stage() {
        // GIVEN
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = MemoryGateway::new();
        let items = vec![
            item! { "name" => "One" },
            item! { "name" => "Two" },
            item! { "name" => "Three" },
        ];

        // WHEN
        let staged = loader.run_load(&items, &mut gateway).unwrap();

        // THEN the single commit drained every staged entity
        assert_eq!(staged, 3);
        assert!(gateway.staged().is_empty());
        assert_eq!(gateway.committed().len(), 3);
        assert_eq!(gateway.commit_count(), 1);
    }

    #[test]
    fn test_empty_batch_stages_nothing_and_never_commits() {
        // GIVEN
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = MemoryGateway::new();

        // WHEN
        let staged = loader.run_load(&[], &mut gateway).unwrap();

        // THEN
        assert_eq!(staged, 0);
        assert!(gateway.staged().is_empty());
        assert!(gateway.committed().is_empty());
        assert_eq!(gateway.commit_count(), 0);
    }

    #[test]
    fn test_plural_values_applied_in_order() {
        // GIVEN
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = MemoryGateway::new();
        let items = vec![item! { "prices" => vec![25, 30, 55] }];

        // WHEN
        loader.run_load(&items, &mut gateway).unwrap();

        // THEN addPrice ran three times with 25, 30, 55 in order
        assert_eq!(
            gateway.committed()[0].get("price"),
            Some(&Value::List(vec![
                Value::Int(25),
                Value::Int(30),
                Value::Int(55)
            ]))
        );
    }
}

mod abort_semantics {
    use super::*;

    #[test]
    fn test_dispatch_failure_aborts_remaining_items() {
        // GIVEN a batch whose second item has an unresolvable property
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = MemoryGateway::new();
        let items = vec![
            item! { "name" => "One" },
            item! { "nickname" => "Oops" },
            item! { "name" => "Three" },
        ];

        // WHEN
        let err = loader.run_load(&items, &mut gateway).unwrap_err();

        // THEN the first item stays staged, nothing was committed
        assert!(matches!(
            err,
            LoaderError::Dispatch(DispatchError::MissingMutator { .. })
        ));
        assert_eq!(gateway.staged().len(), 1);
        assert!(gateway.committed().is_empty());
        assert_eq!(gateway.commit_count(), 0);
    }

    #[test]
    fn test_stage_failure_propagates_unchanged() {
        // GIVEN a gateway refusing the second stage call
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = FailingGateway::new().fail_stage_at(1);
        let items = vec![
            item! { "name" => "One" },
            item! { "name" => "Two" },
            item! { "name" => "Three" },
        ];

        // WHEN
        let err = loader.run_load(&items, &mut gateway).unwrap_err();

        // THEN
        assert!(matches!(err, LoaderError::Gateway(_)));
        assert!(err.to_string().contains("stage 1 refused"));
        assert_eq!(gateway.staged().len(), 1);
        assert_eq!(gateway.commit_count(), 0);
    }

    #[test]
    fn test_commit_failure_propagates_unchanged() {
        // GIVEN
        let registry = test_entity_registry();
        let mut loader = Autoloader::new(&registry, "fixtures::LoadTestEntityData");
        let mut gateway = FailingGateway::new().fail_commit();
        let items = vec![item! { "name" => "One" }];

        // WHEN
        let err = loader.run_load(&items, &mut gateway).unwrap_err();

        // THEN staged entities remain staged, never committed
        assert!(matches!(err, LoaderError::Gateway(_)));
        assert!(err.to_string().contains("commit refused"));
        assert_eq!(gateway.staged().len(), 1);
        assert!(gateway.committed().is_empty());
    }
}
