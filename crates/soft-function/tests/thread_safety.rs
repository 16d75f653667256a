use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use soft_core::{Cause, SoftError};
use soft_function::combinator::{And, Invert, OtherwiseFail, Suppress, Then, With, Xor};
use soft_function::prelude::*;
use soft_function::{callback, condition, consumer, function, getter, predicate, supplier};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn adapters_over_thread_safe_operands_are_send_and_sync() {
    assert_send_sync::<And<condition::Constant, condition::Constant>>();
    assert_send_sync::<Invert<Xor<predicate::Constant, predicate::Constant>>>();
    assert_send_sync::<Then<condition::Constant, callback::Empty>>();
    assert_send_sync::<OtherwiseFail<condition::Constant, supplier::Constant<Cause>>>();
    assert_send_sync::<With<supplier::Constant<u8>, getter::Strict<String>>>();
    assert_send_sync::<Suppress<consumer::Empty, i32>>();
    assert_send_sync::<function::Strict<u64>>();
    assert_send_sync::<SoftError>();
}

#[test]
fn composed_condition_is_shared_across_threads() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let composed = Arc::new(
        condition::constant(true)
            .and(condition::constant(false).invert())
            .then(callback::from_fn(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })),
    );

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let composed = Arc::clone(&composed);
            thread::spawn(move || composed.compute())
        })
        .collect();
    for worker in workers {
        assert!(worker.join().expect("worker panicked").unwrap());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}
