//! Property tests for shared resource validation.

use std::path::Component;

use proptest::prelude::*;

use cutover::SharedResource;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9_.-]{1,12}").unwrap(),
        Just("..".to_string()),
        Just(".".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Accepted resources stay inside the release directory.
    #[test]
    fn property_accepted_resources_stay_inside_release(
        segments in proptest::collection::vec(segment(), 1..5),
        leading_slash in any::<bool>(),
    ) {
        let raw = format!("{}{}", if leading_slash { "/" } else { "" }, segments.join("/"));

        if let Ok(resource) = SharedResource::new(&raw) {
            prop_assert!(!resource.as_path().is_absolute());
            prop_assert!(!resource
                .as_path()
                .components()
                .any(|c| matches!(c, Component::ParentDir)));
        }
        if leading_slash {
            prop_assert!(SharedResource::new(&raw).is_err());
        }
    }

    /// PROPERTY: The parent of a nested resource is a prefix of it.
    #[test]
    fn property_parent_is_a_prefix(
        segments in proptest::collection::vec(
            proptest::string::string_regex("[a-z]{1,8}").unwrap(),
            1..5,
        )
    ) {
        let raw = segments.join("/");
        let resource = SharedResource::new(&raw).unwrap();

        match resource.parent() {
            Some(parent) => {
                prop_assert!(segments.len() > 1);
                let prefix = format!("{}/", parent);
                prop_assert!(raw.starts_with(&prefix));
            }
            None => prop_assert_eq!(segments.len(), 1),
        }
    }
}
