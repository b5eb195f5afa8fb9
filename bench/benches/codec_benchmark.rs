use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use links_widget::codec;
use links_widget::plugin::DashboardWidget;
use links_widget::{Bookmark, BookmarkStore, LinksWidget};
use links_widget_bench::sample_bookmarks;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in [10usize, 100, 1000] {
        let bookmarks = sample_bookmarks(size);
        let encoded = codec::encode(&bookmarks);
        let text = serde_json::to_string(&encoded).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &bookmarks, |b, bookmarks| {
            b.iter(|| codec::encode(black_box(bookmarks)))
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec::decode(black_box(encoded)))
        });

        // Full host save/load cycle: text -> widget -> text
        group.bench_with_input(BenchmarkId::new("round_trip_text", size), &text, |b, text| {
            b.iter(|| {
                let value: serde_json::Value = serde_json::from_str(black_box(text)).unwrap();
                let mut widget = LinksWidget::new();
                widget.deserialize(&value);
                serde_json::to_string(&widget.serialize()).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("append 1000", |b| {
        let bookmarks = sample_bookmarks(1000);
        b.iter(|| {
            let mut store = BookmarkStore::new();
            for bookmark in &bookmarks {
                store.append(bookmark.clone());
            }
            store
        })
    });

    group.bench_function("remove_at front of 1000", |b| {
        b.iter_with_setup(
            || BookmarkStore::from(sample_bookmarks(1000)),
            |mut store| {
                while store.remove_at(0).is_some() {}
                store
            },
        );
    });

    group.bench_function("replace_at middle", |b| {
        let mut store = BookmarkStore::from(sample_bookmarks(1000));
        let replacement = Bookmark::new("Replaced", "https://replaced.example");
        b.iter(|| store.replace_at(black_box(500), replacement.clone()))
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_store);
criterion_main!(benches);
