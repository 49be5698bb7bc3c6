use plugsync_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));

        // Only a leading network prefix may contain a double slash
        let remainder = if as_str.starts_with("//") { &as_str[2..] } else { as_str };
        prop_assert!(!remainder.contains("//"));

        // Cleaning is idempotent
        let again = NormalizedPath::new(path.to_native());
        prop_assert_eq!(&again, &path);
    }

    #[test]
    fn test_join_properties(a in "[a-zA-Z0-9_./-]{0,24}", b in "[a-zA-Z0-9_-]{1,12}") {
        let base = NormalizedPath::new(&a);
        let joined = base.join(&b);

        // A plain segment lands directly beneath the base
        prop_assert_eq!(joined.file_name(), Some(b.as_str()));
        prop_assert_eq!(joined.join(".."), base.clone());

        prop_assert_eq!(base.join(""), base.clone());
        prop_assert_eq!(base.join("."), base);
    }
}
