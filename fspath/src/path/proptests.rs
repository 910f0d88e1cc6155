//! Property-based tests for path values.
//!
//! Note: The normalize module already has property tests for joining.
//! This module focuses on the queries built on top of it.

use super::FsPath;
use proptest::prelude::*;
use std::path::Path;

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_-]{1,12}",
        "[a-z0-9_-]{1,8}\\.[a-z]{1,4}",
        "\\.[a-z]{1,8}",
        Just("..".to_string()),
        Just(".".to_string()),
    ]
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rebuilding from the normalized string is a no-op
    #[test]
    fn construction_idempotent(segments in segments_strategy()) {
        let path = FsPath::new(segments.iter());
        prop_assert_eq!(FsPath::new([path.as_str()]), path.clone());
        prop_assert_eq!(FsPath::new([&path]), path);
    }

    // parent() wraps exactly directory_name()
    #[test]
    fn parent_matches_directory_name(segments in segments_strategy()) {
        let path = FsPath::new(segments.iter());
        let parent = path.parent();
        prop_assert_eq!(parent.as_str(), path.directory_name());
    }

    // Repeated parent() reaches a fixed point
    #[test]
    fn parent_reaches_fixed_point(segments in segments_strategy()) {
        let mut path = FsPath::new(segments.iter());
        for _ in 0..=segments.len() + 1 {
            path = path.parent();
        }
        prop_assert_eq!(path.parent(), path);
    }

    // Extension is always a suffix of the path and starts with a dot
    #[test]
    fn extension_is_dotted_suffix(segments in segments_strategy()) {
        let path = FsPath::new(segments.iter());
        let ext = path.extension();
        if !ext.is_empty() {
            prop_assert!(ext.starts_with('.'));
            prop_assert!(path.as_str().ends_with(ext));
        }
    }

    // Extension agrees with std for names that std and we both treat as dotted
    #[test]
    fn extension_agrees_with_std(stem in "[a-z0-9]{1,8}", ext in "[a-z0-9]{1,4}") {
        let name = format!("{stem}.{ext}");
        let path = FsPath::from(name.as_str());
        let std_ext = Path::new(&name).extension().and_then(|e| e.to_str()).map(|e| format!(".{e}"));
        prop_assert_eq!(Some(path.extension().to_string()), std_ext);
    }
}
