use std::cell::Cell;
use std::fmt;

use soft_core::{Cause, ErrorKind, SoftError};
use soft_function::prelude::*;
use soft_function::{callback, condition, supplier};

fn counted(result: bool, calls: &Cell<usize>) -> impl Condition + '_ {
    condition::from_fn(move || {
        calls.set(calls.get() + 1);
        Ok(result)
    })
}

#[derive(Debug)]
struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected")
    }
}

impl std::error::Error for Rejected {}

#[test]
fn and_skips_operand_when_self_is_false() {
    let calls = Cell::new(0);
    let composed = condition::constant(false).and(counted(true, &calls));
    assert!(!composed.compute().unwrap());
    assert_eq!(calls.get(), 0);

    let composed = condition::constant(true).and(counted(false, &calls));
    assert!(!composed.compute().unwrap());
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_skips_operand_when_self_is_true() {
    let calls = Cell::new(0);
    let composed = condition::constant(true).or(counted(false, &calls));
    assert!(composed.compute().unwrap());
    assert_eq!(calls.get(), 0);

    let composed = condition::constant(false).or(counted(true, &calls));
    assert!(composed.compute().unwrap());
    assert_eq!(calls.get(), 1);
}

#[test]
fn xor_always_computes_both() {
    let left = Cell::new(0);
    let right = Cell::new(0);
    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        let composed = counted(a, &left).xor(counted(b, &right));
        assert_eq!(composed.compute().unwrap(), a ^ b);
    }
    assert_eq!(left.get(), 4);
    assert_eq!(right.get(), 4);
}

#[test]
fn both_flag_selects_eager_evaluation() {
    let calls = Cell::new(0);
    assert!(!condition::constant(false).and_both(counted(true, &calls), true).compute().unwrap());
    assert_eq!(calls.get(), 1);
    assert!(!condition::constant(false).and_both(counted(true, &calls), false).compute().unwrap());
    assert_eq!(calls.get(), 1);

    assert!(condition::constant(true).or_both(counted(false, &calls), true).compute().unwrap());
    assert_eq!(calls.get(), 2);
    assert!(condition::constant(true).or_both(counted(false, &calls), false).compute().unwrap());
    assert_eq!(calls.get(), 2);
}

#[test]
fn composition_does_not_evaluate() {
    let calls = Cell::new(0);
    let composed = counted(true, &calls)
        .and(counted(true, &calls))
        .or(counted(false, &calls))
        .invert();
    assert_eq!(calls.get(), 0);
    assert!(!composed.compute().unwrap());
    assert_eq!(calls.get(), 2);
    assert!(!composed.compute().unwrap());
    assert_eq!(calls.get(), 4);
}

#[test]
fn absent_operand_is_rejected_before_any_compute() {
    let calls = Cell::new(0);
    let base = counted(true, &calls);
    let err = condition::of(None::<condition::Constant>)
        .map(|operand| base.and(operand))
        .err()
        .expect("absent operand must be rejected");
    assert_eq!(err.kind(), ErrorKind::Null);
    assert_eq!(err.message(), Some("condition must not be null"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn present_operand_is_returned_unchanged() {
    let operand = condition::of(Some(condition::constant(true))).unwrap();
    assert_eq!(operand, condition::constant(true));
    assert!(!condition::constant(true).and(operand.invert()).compute().unwrap());
}

#[test]
fn then_calls_back_only_on_true() {
    let hits = Cell::new(0);
    let cb = callback::from_fn(|| {
        hits.set(hits.get() + 1);
        Ok(())
    });
    assert!(condition::constant(true).then(&cb).compute().unwrap());
    assert_eq!(hits.get(), 1);
    assert!(!condition::constant(false).then(&cb).compute().unwrap());
    assert_eq!(hits.get(), 1);
}

#[test]
fn otherwise_calls_back_only_on_false() {
    let hits = Cell::new(0);
    let cb = callback::from_fn(|| {
        hits.set(hits.get() + 1);
        Ok(())
    });
    assert!(!condition::constant(false).otherwise(&cb).compute().unwrap());
    assert_eq!(hits.get(), 1);
    assert!(condition::constant(true).otherwise(&cb).compute().unwrap());
    assert_eq!(hits.get(), 1);
}

#[test]
fn then_fail_raises_compute_with_the_exact_cause() {
    let cause = Cause::new(Rejected);
    let err = condition::constant(true)
        .then_fail(supplier::constant(cause.clone()))
        .compute()
        .unwrap_err();
    assert!(matches!(err, SoftError::Compute(_)));
    assert!(err.cause().unwrap().ptr_eq(&cause));
}

#[test]
fn then_fail_leaves_supplier_untouched_on_false() {
    let supplies = Cell::new(0);
    let supplier = supplier::from_fn(|| {
        supplies.set(supplies.get() + 1);
        Ok(Rejected)
    });
    assert!(!condition::constant(false).then_fail(supplier).compute().unwrap());
    assert_eq!(supplies.get(), 0);
}

#[test]
fn otherwise_fail_mirrors_then_fail() {
    let cause = Cause::new(Rejected);
    assert!(condition::constant(true)
        .otherwise_fail(supplier::constant(cause.clone()))
        .compute()
        .unwrap());
    let err = condition::constant(false)
        .otherwise_fail(supplier::constant(cause.clone()))
        .compute()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Compute);
    assert!(err.cause().unwrap().ptr_eq(&cause));
}

#[test]
fn operand_failures_pass_through_unchanged() {
    let failing = condition::from_fn(|| Err(SoftError::templated(ErrorKind::Compute, "ready")));
    let err = condition::constant(true).and(failing).compute().unwrap_err();
    assert_eq!(err, SoftError::templated(ErrorKind::Compute, "ready"));

    let failing_supplier =
        supplier::from_fn(|| Err::<Rejected, _>(SoftError::of(ErrorKind::Supply)));
    let err = condition::constant(true)
        .then_fail(failing_supplier)
        .compute()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Supply);
}

#[test]
fn failing_callback_aborts_then() {
    let failing = callback::from_fn(|| Err(SoftError::of(ErrorKind::Call)));
    let err = condition::constant(true).then(failing).compute().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Call);
}
