use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urlencode::{escape, pct_enc::EStr, unescape, Kind};

criterion_group!(benches, bench_escape, bench_unescape, bench_validate);
criterion_main!(benches);

const ENC_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";
const DEC_CASE: &str = "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%25st%5E&+=";

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape_query", |b| {
        b.iter(|| escape(Kind::QueryComponent, black_box(ENC_CASE)))
    });
    c.bench_function("escape_path", |b| {
        b.iter(|| escape(Kind::Path, black_box("/usr/share/doc/index.html")))
    });
}

fn bench_unescape(c: &mut Criterion) {
    c.bench_function("unescape", |b| {
        b.iter(|| unescape(Kind::Fragment, black_box(DEC_CASE)))
    });
    c.bench_function("unescape_unencoded", |b| {
        b.iter(|| unescape(Kind::Path, black_box("/usr/share/doc/index.html")))
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate", |b| b.iter(|| EStr::new(black_box(DEC_CASE))));
}
