use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soft_function::prelude::*;
use soft_function::{condition, predicate};

fn build_predicate_chain(depth: usize) -> Box<dyn Predicate<u64>> {
    let mut chain: Box<dyn Predicate<u64>> = Box::new(predicate::constant(true));
    for step in 0..depth as u64 {
        let divisible = predicate::from_fn(move |v: &u64| Ok(v % (step + 2) != 1));
        chain = Box::new(chain.and(divisible));
    }
    chain
}

fn bench_condition_chain(c: &mut Criterion) {
    let chain = condition::constant(true)
        .and(condition::constant(true))
        .xor(condition::constant(false))
        .or(condition::constant(false))
        .invert()
        .invert();
    c.bench_function("condition_chain_static", |b| {
        b.iter(|| black_box(chain.compute().unwrap()))
    });
}

fn bench_predicate_chain(c: &mut Criterion) {
    let chain = build_predicate_chain(32);
    c.bench_function("predicate_chain_boxed_32", |b| {
        b.iter(|| black_box(chain.evaluate(black_box(&1_000_000)).unwrap()))
    });
}

criterion_group!(benches, bench_condition_chain, bench_predicate_chain);
criterion_main!(benches);
