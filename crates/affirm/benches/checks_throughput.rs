use affirm::{be, be_true, equal, throw, Instance, Raised, Should, StaticRegistry, TypeDecl, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_registry() -> StaticRegistry {
    let mut builder = StaticRegistry::builder()
        .declare(TypeDecl::interface("Named").methods(["name"]))
        .declare(TypeDecl::mixin("Loggable").methods(["log"]))
        .declare(TypeDecl::class("Level0").methods(["m0"]));
    for depth in 1..32 {
        builder = builder.declare(
            TypeDecl::class(format!("Level{depth}"))
                .extends(format!("Level{}", depth - 1))
                .implements(["Named"])
                .uses(["Loggable"])
                .methods([format!("m{depth}")]),
        );
    }
    builder.build().expect("bench registry")
}

fn bench_value_checks(c: &mut Criterion) {
    let flags = vec![true; 256];
    let numbers: Vec<Value> = (0..256)
        .map(|n| Value::from(if n % 2 == 0 { "7" } else { "7.0" }))
        .collect();
    c.bench_function("be_true_256", |b| {
        b.iter(|| be_true(black_box(flags.iter().copied())).expect("all true"))
    });
    c.bench_function("be_256", |b| {
        b.iter(|| be(true, black_box(flags.iter().copied())).expect("identical"))
    });
    c.bench_function("equal_numeric_strings_256", |b| {
        b.iter(|| {
            let reference = Value::from(7);
            equal(reference, black_box(numbers.iter().cloned())).expect("numerically equal")
        })
    });
}

fn bench_registry_checks(c: &mut Criterion) {
    let registry = sample_registry();
    let should = Should::new(&registry);
    let deepest = Instance::new("Level31");
    c.bench_function("have_method_deep_hierarchy", |b| {
        b.iter(|| {
            should
                .have_method(deepest.clone(), black_box(["m0", "name", "log"]))
                .expect("inherited")
        })
    });
    c.bench_function("be_a_deep_hierarchy", |b| {
        b.iter(|| {
            should
                .be_a(deepest.clone(), black_box(["Level0", "Named"]))
                .expect("subtype")
        })
    });
}

fn bench_invocations(c: &mut Criterion) {
    let raising = || -> Result<(), Raised> { Err(Raised::new("K", "bench")) };
    c.bench_function("throw_64", |b| {
        b.iter(|| throw("K", black_box(vec![raising; 64])).expect("raised"))
    });
}

criterion_group!(
    benches,
    bench_value_checks,
    bench_registry_checks,
    bench_invocations
);
criterion_main!(benches);
