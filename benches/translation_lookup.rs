// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use devfolio::application::port::{DocumentAttributes, MemoryStore};
use devfolio::i18n::{LanguageContext, Locale, TranslationTable};
use std::hint::black_box;
use std::sync::Arc;

fn translation_lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");
    let table = Arc::new(TranslationTable::builtin().expect("embedded catalogs should parse"));

    group.bench_function("builtin_parse", |b| {
        b.iter(|| black_box(TranslationTable::builtin().unwrap()));
    });

    let ctx = LanguageContext::new(
        Arc::clone(&table),
        MemoryStore::new(),
        DocumentAttributes::new(),
        Locale::Ar,
    );
    group.bench_function("hit", |b| {
        b.iter(|| black_box(ctx.tr(black_box("projects.cta.title"))));
    });
    group.bench_function("miss_falls_back_to_key", |b| {
        b.iter(|| black_box(ctx.tr(black_box("no.such.key"))));
    });

    let mut switching = LanguageContext::new(
        table,
        MemoryStore::new(),
        DocumentAttributes::new(),
        Locale::En,
    );
    group.bench_function("toggle_locale", |b| {
        b.iter(|| black_box(switching.toggle_locale()));
    });

    group.finish();
}

criterion_group!(benches, translation_lookup_benchmark);
criterion_main!(benches);
