use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vies::format::*;

fn bench_format_plain(c: &mut Criterion) {
    c.bench_function("format_plain", |b| {
        b.iter(|| black_box(format_vat_number(black_box("12 345-678"), black_box("hu"))));
    });
}

fn bench_format_nl_subnumber(c: &mut Criterion) {
    c.bench_function("format_nl_subnumber", |b| {
        b.iter(|| black_box(format_vat_number(black_box("123456789"), black_box("NL"))));
    });
}

fn bench_country_name_lookup(c: &mut Criterion) {
    c.bench_function("country_name_lookup", |b| {
        b.iter(|| black_box(country_name(black_box("HU"), black_box("hu"))));
    });
}

fn bench_all_countries(c: &mut Criterion) {
    c.bench_function("all_countries_en", |b| {
        b.iter(|| black_box(all_countries(black_box("en"))));
    });
}

fn bench_supported_languages(c: &mut Criterion) {
    c.bench_function("supported_languages", |b| {
        b.iter(|| black_box(supported_languages()));
    });
}

criterion_group!(
    benches,
    bench_format_plain,
    bench_format_nl_subnumber,
    bench_country_name_lookup,
    bench_all_countries,
    bench_supported_languages,
);
criterion_main!(benches);
