// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use boas_shop::{
    feed::{self, aggregate, keep_available, parse},
    view::{recompute, SortMode, ViewState},
};

const MODELS: &[&str] = &["Air Max 90", "Samba OG", "Jordan 1 Low", "Dunk Low", "Gazelle", "New Balance 550"];
const SIZES: &[&str] = &["38", "39", "40", "40,5", "41", "42", "42.5", "43", "44", "45"];

/// Synthetic feed: a few thousand unit rows across a few hundred products.
fn synthetic_feed(rows: usize) -> String {
    let mut out = String::from("Name,SKU,Size,Price + ship,image_url,notes\n");
    for i in 0..rows {
        let model = MODELS[i % MODELS.len()];
        let variant = (i / MODELS.len()) % 60;
        let size = SIZES[(i * 7) % SIZES.len()];
        let price = 60 + (variant * 13) % 400;
        let notes = if i % 17 == 0 { "on hold" } else { "" };
        out.push_str(&format!(
            "{model} #{variant},SKU-{variant:03},\"{size}\",\"{price},00 €\",https://drive.google.com/file/d/{i}/view?usp=sharing,{notes}\n"
        ));
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let text = synthetic_feed(5_000);

    c.bench_function("parse", |b| {
        b.iter(|| black_box(parse(black_box(&text))).len())
    });

    let rows = keep_available(parse(&text));
    c.bench_function("aggregate", |b| {
        b.iter(|| black_box(aggregate(black_box(&rows))).len())
    });

    c.bench_function("process_full", |b| {
        b.iter(|| black_box(feed::process(black_box(&text))).len())
    });

    let products = feed::process(&text);
    let mut view = ViewState::new();
    view.search_term = String::from("low");
    view.toggle_size("42,5");
    view.toggle_size("40.5");
    view.sort_mode = SortMode::PriceDesc;

    c.bench_function("recompute", |b| {
        b.iter(|| black_box(recompute(black_box(&products), black_box(&view))).len())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
