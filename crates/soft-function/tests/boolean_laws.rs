use proptest::prelude::*;
use soft_function::prelude::*;
use soft_function::{condition, predicate};

proptest! {
    #[test]
    fn condition_matches_boolean_operators(a in any::<bool>(), b in any::<bool>()) {
        let ca = condition::constant(a);
        let cb = condition::constant(b);
        prop_assert_eq!(ca.and(cb).compute().unwrap(), a && b);
        prop_assert_eq!(ca.or(cb).compute().unwrap(), a || b);
        prop_assert_eq!(ca.xor(cb).compute().unwrap(), a ^ b);
        prop_assert_eq!(ca.and_both(cb, true).compute().unwrap(), a & b);
        prop_assert_eq!(ca.or_both(cb, true).compute().unwrap(), a | b);
    }

    #[test]
    fn double_inversion_is_identity(a in any::<bool>()) {
        let c = condition::constant(a);
        prop_assert_eq!(c.invert().invert().compute().unwrap(), c.compute().unwrap());
    }

    #[test]
    fn predicate_matches_boolean_operators(threshold in -50i64..50, bound in -50i64..50, value in -100i64..100) {
        let above = predicate::from_fn(move |v: &i64| Ok(*v > threshold));
        let below = predicate::from_fn(move |v: &i64| Ok(*v < bound));
        let a = value > threshold;
        let b = value < bound;
        prop_assert_eq!(above.clone().and(below.clone()).evaluate(&value).unwrap(), a && b);
        prop_assert_eq!(above.clone().or(below.clone()).evaluate(&value).unwrap(), a || b);
        prop_assert_eq!(above.clone().xor(below).evaluate(&value).unwrap(), a ^ b);
        prop_assert_eq!(above.invert().evaluate(&value).unwrap(), !a);
    }
}
