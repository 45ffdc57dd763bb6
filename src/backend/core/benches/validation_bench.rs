//! Validator style benchmarks. Run with: cargo bench --bench validation_bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use fieldcheck_core::fixtures::{self, Fixture};
use fieldcheck_core::validation::{validate_field, DobPolicy, NotEmpty, PlausibleBirthDate, ValidationErrors};
use fieldcheck_core::validators::{all_validators, validate_record};
const REFERENCE_YEAR: i32 = 2026;
fn policy() -> DobPolicy { DobPolicy::for_year(REFERENCE_YEAR) }
fn bench_validate_by_style(c: &mut Criterion) {
    let mut g = c.benchmark_group("validate"); g.measurement_time(Duration::from_secs(5));
    let validators = all_validators(policy());
    for fixture in fixtures::all() {
        for v in &validators {
            g.bench_with_input(BenchmarkId::new(v.style().as_str(), fixture.name), &fixture, |b, f: &Fixture| { b.iter(|| black_box(v.validate(black_box(f.record())))); });
        }
    }
    g.finish();
}
fn bench_is_valid_by_style(c: &mut Criterion) {
    let mut g = c.benchmark_group("is_valid"); g.measurement_time(Duration::from_secs(5));
    let validators = all_validators(policy());
    for fixture in [fixtures::boundary(), fixtures::valid()] {
        for v in &validators {
            g.bench_with_input(BenchmarkId::new(v.style().as_str(), fixture.name), &fixture, |b, f: &Fixture| { b.iter(|| black_box(v.is_valid(black_box(f.record())))); });
        }
    }
    g.finish();
}
fn bench_single_rules(c: &mut Criterion) {
    let mut g = c.benchmark_group("rules");
    let valid = fixtures::valid(); let record = valid.record().cloned().unwrap_or_default();
    g.bench_function("not_empty_numbers", |b| { b.iter(|| black_box(validate_field("numbers", black_box(&record.numbers)).rule(NotEmpty).is_valid())); });
    g.bench_function("not_empty_name", |b| { b.iter(|| black_box(validate_field("name", black_box(&record.name)).rule(NotEmpty).is_valid())); });
    g.bench_function("plausible_birth_date", |b| { let rule = PlausibleBirthDate(policy()); b.iter(|| black_box(validate_field("dateOfBirth", black_box(&record.date_of_birth)).rule(rule).is_valid())); });
    g.bench_function("policy_check", |b| { let p = policy(); b.iter(|| black_box(p.check(black_box(record.date_of_birth)))); });
    g.bench_function("current_policy", |b| { b.iter(|| black_box(DobPolicy::current())); });
    g.finish();
}
fn bench_batch_validation(c: &mut Criterion) {
    let mut g = c.benchmark_group("batch"); g.measurement_time(Duration::from_secs(8));
    let validators = all_validators(policy());
    for &bs in &[10usize, 100, 1000] {
        g.throughput(Throughput::Elements(bs as u64));
        let inputs: Vec<Fixture> = (0..bs).map(|i| fixtures::all()[i % 4].clone()).collect();
        for v in &validators {
            g.bench_with_input(BenchmarkId::new(v.style().as_str(), bs), &inputs, |b, inputs| {
                b.iter(|| { let mut n = 0usize; for f in inputs { if v.is_valid(black_box(f.record())) { n += 1; } } black_box(n) });
            });
        }
    }
    g.finish();
}
fn bench_failure_list(c: &mut Criterion) {
    let mut g = c.benchmark_group("failures");
    g.bench_function("create_empty", |b| { b.iter(|| black_box(ValidationErrors::new())); });
    g.bench_function("null_model", |b| { b.iter(|| black_box(ValidationErrors::null_model("Null model."))); });
    g.bench_function("messages_of_blank", |b| { let blank = fixtures::blank(); let e = validate_record(blank.record(), &policy()); b.iter(|| black_box(e.messages())); });
    g.finish();
}
criterion_group!(benches, bench_validate_by_style, bench_is_valid_by_style, bench_single_rules, bench_batch_validation, bench_failure_list);
criterion_main!(benches);
