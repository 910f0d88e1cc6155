use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fspath::path::normalize;
use fspath::{fspath, FsPath};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("single_segment", |b| {
        b.iter(|| FsPath::from(black_box("/absolute/path/to/file")));
    });

    group.bench_function("many_segments", |b| {
        b.iter(|| FsPath::new(black_box(["usr", "local", "share", "doc", "readme.md"])));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| FsPath::from(black_box("/a/b/../c/./d/../../e/f")));
    });

    let base = FsPath::from("/home/user/project");
    group.bench_function("mixed_segments", |b| {
        b.iter(|| fspath!(black_box(&base), "src", "lib.rs"));
    });

    group.bench_function("normalize_only", |b| {
        b.iter(|| normalize::normalize(black_box("./x//y/./z/..")));
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let path = FsPath::from("/srv/www/static/js/app.bundle.min.js");

    group.bench_function("directory_name", |b| {
        b.iter(|| black_box(&path).directory_name());
    });

    group.bench_function("extension", |b| {
        b.iter(|| black_box(&path).extension().len());
    });

    group.bench_function("parent", |b| {
        b.iter(|| black_box(&path).parent());
    });

    group.bench_function("parent_chain", |b| {
        b.iter(|| {
            let mut current = black_box(&path).clone();
            while current.parent() != current {
                current = current.parent();
            }
            current
        });
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
