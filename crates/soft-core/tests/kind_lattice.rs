use proptest::prelude::*;
use soft_core::errors::{ErrorKind, SoftError};

fn any_kind() -> impl Strategy<Value = ErrorKind> {
    proptest::sample::select(ErrorKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn ancestry_is_transitive(a in any_kind(), b in any_kind(), c in any_kind()) {
        if a.is_a(b) && b.is_a(c) {
            prop_assert!(a.is_a(c));
        }
    }

    #[test]
    fn ancestry_is_antisymmetric(a in any_kind(), b in any_kind()) {
        if a.is_a(b) && b.is_a(a) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn templates_embed_the_name(kind in any_kind(), name in "[a-z]{1,12}") {
        let err = SoftError::templated(kind, &name);
        prop_assert!(err.message().unwrap().contains(&name));
        prop_assert_eq!(err.kind(), kind);
    }
}
