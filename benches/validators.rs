use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fractal_validation::rpc::{parse_request, CreateSellOfferPayload};
use fractal_validation::*;

const ADDRESS: &str = "D7P2jVEK6JGiGepUGTAHqELKK8QJ8GCahZ";
const HASH: &str = "a1b2c3d4e5f6789012345678901234567890123456789012345678901234abcd";

fn benchmark_validate_address(c: &mut Criterion) {
    c.bench_function("validate_address", |b| {
        b.iter(|| validate_address(black_box(ADDRESS)).unwrap())
    });
}

fn benchmark_validate_hash(c: &mut Criterion) {
    c.bench_function("validate_hash", |b| {
        b.iter(|| validate_hash(black_box(HASH)).unwrap())
    });
}

fn benchmark_validate_description(c: &mut Criterion) {
    let description = "Limited print, signed by the artist. ".repeat(25);

    c.bench_function("validate_description", |b| {
        b.iter(|| validate_description(black_box(&description)).unwrap())
    });
}

fn benchmark_validate_tags(c: &mut Criterion) {
    let tags: Vec<String> = (0..MAX_TAG_COUNT).map(|i| format!("tag-{}", i)).collect();

    c.bench_function("validate_tags", |b| {
        b.iter(|| validate_tags(black_box(&tags)).unwrap())
    });
}

fn benchmark_sanitize_query_param(c: &mut Criterion) {
    let param = format!("  {}\n\t\0  ", "x".repeat(150));

    c.bench_function("sanitize_query_param", |b| {
        b.iter(|| black_box(sanitize_query_param(black_box(&param))))
    });
}

fn benchmark_parse_offer_request(c: &mut Criterion) {
    let body = serde_json::json!({
        "offerer_address": ADDRESS,
        "mint_hash": HASH,
        "quantity": 10,
        "price": 250,
    })
    .to_string();

    c.bench_function("parse_offer_request", |b| {
        b.iter(|| parse_request::<CreateSellOfferPayload>(black_box(body.as_bytes())).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_validate_address,
    benchmark_validate_hash,
    benchmark_validate_description,
    benchmark_validate_tags,
    benchmark_sanitize_query_param,
    benchmark_parse_offer_request
);
criterion_main!(benches);
