// Criterion benchmarks for request construction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use medassist_client::models::{
    parse_medication_list, ClientConfig, MedicationCheckRequest, TriageRequest,
};

fn medication_text(count: usize) -> String {
    (0..count)
        .map(|i| format!(" medication-{} ", i))
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_parse_medications(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_medication_list");

    for count in [1, 10, 100, 1000] {
        let text = medication_text(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| parse_medication_list(black_box(text)))
        });
    }

    group.finish();
}

fn bench_request_bodies(c: &mut Criterion) {
    let meds = MedicationCheckRequest::from_free_text("u1", &medication_text(20));

    c.bench_function("triage_request_json", |b| {
        b.iter(|| {
            let request = TriageRequest::new(black_box(""), black_box("fever and cough"), None);
            serde_json::to_vec(&request)
        })
    });

    c.bench_function("medication_request_json", |b| {
        b.iter(|| serde_json::to_vec(black_box(&meds)))
    });
}

fn bench_endpoint(c: &mut Criterion) {
    let config = ClientConfig::new("https://medassist.example.com/");

    c.bench_function("endpoint_join", |b| {
        b.iter(|| config.endpoint(black_box("/medications/check")))
    });
}

criterion_group!(benches, bench_parse_medications, bench_request_bodies, bench_endpoint);
criterion_main!(benches);
