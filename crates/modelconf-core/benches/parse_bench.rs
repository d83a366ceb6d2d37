//! Criterion benchmarks for model configuration parsing.
//!
//! Run with:
//! ```bash
//! cargo bench --package modelconf-core --bench parse_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modelconf_core::parser::preprocess;
use modelconf_core::{DefaultConfig, ModelConfig};

const RBAC_MODEL: &str = "\
[request_definition]
r = sub, obj, act

[policy_definition]
p = sub, obj, act

[role_definition]
g = _, _

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = g(r.sub, p.sub) && \\
    r.obj == p.obj && \\
    r.act == p.act   # match everything
";

fn generated_model(sections: usize, options: usize) -> String {
    let mut text = String::new();
    for s in 0..sections {
        text.push_str(&format!("# section {s}\n[section_{s}]\n"));
        for o in 0..options {
            text.push_str(&format!("option_{o} = value {s} {o} # comment\n"));
        }
    }
    text
}

fn bench_rbac_model(c: &mut Criterion) {
    c.bench_function("create_from_text/rbac", |b| {
        b.iter(|| DefaultConfig::create_from_text(black_box(RBAC_MODEL)).unwrap())
    });

    c.bench_function("preprocess/rbac", |b| {
        b.iter(|| preprocess(black_box(RBAC_MODEL).lines()))
    });

    let cfg = DefaultConfig::create_from_text(RBAC_MODEL).unwrap();
    c.bench_function("get/hit", |b| b.iter(|| cfg.get(black_box("Matchers::M"))));
    c.bench_function("get/miss", |b| b.iter(|| cfg.get(black_box("matchers::x"))));
}

fn bench_generated_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_from_text/generated");
    for sections in [10usize, 100, 1000] {
        let text = generated_model(sections, 10);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &text, |b, text| {
            b.iter(|| DefaultConfig::create_from_text(black_box(text)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rbac_model, bench_generated_models);
criterion_main!(benches);
