use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mimedb::{build_match_node, build_rule_set, MimeDatabase, MimeDatabaseBuilder};
use std::hint::black_box;

fn build_database() -> MimeDatabase {
    let mut builder = MimeDatabaseBuilder::new();

    // A spread of common extensions at default weight
    let globs = [
        ("image/png", "*.png"),
        ("image/jpeg", "*.jpg"),
        ("image/jpeg", "*.jpeg"),
        ("image/gif", "*.gif"),
        ("text/plain", "*.txt"),
        ("text/html", "*.html"),
        ("application/gzip", "*.gz"),
        ("application/x-compressed-tar", "*.tar.gz"),
        ("application/zip", "*.zip"),
        ("text/x-makefile", "Makefile"),
        ("text/x-log", "*.log.[0-9]"),
    ];
    for (mime, pattern) in globs {
        builder.add_glob(mime, pattern, 50, false).unwrap();
    }

    builder.add_magic(
        "image/png",
        build_rule_set(
            50,
            vec![build_match_node("string", "\\x89PNG\\r\\n\\x1a\\n", None, "0").unwrap()],
        ),
    );
    builder.add_magic(
        "image/gif",
        build_rule_set(
            50,
            vec![
                build_match_node("string", "GIF87a", None, "0").unwrap(),
                build_match_node("string", "GIF89a", None, "0").unwrap(),
            ],
        ),
    );
    builder.add_magic(
        "application/zip",
        build_rule_set(
            50,
            vec![build_match_node("string", "PK\\003\\004", None, "0").unwrap()],
        ),
    );
    builder.add_magic(
        "application/x-shellscript",
        build_rule_set(
            90,
            vec![build_match_node("string", "#!", None, "0").unwrap()],
        ),
    );

    builder.build()
}

fn bench_lookup(c: &mut Criterion) {
    let db = build_database();

    let mut group = c.benchmark_group("lookup");

    group.bench_function("filename_hit", |b| {
        b.iter(|| db.match_filename(black_box("archive.tar.gz")))
    });
    group.bench_function("filename_miss", |b| {
        b.iter(|| db.match_filename(black_box("no.extension.here.xyz")))
    });

    let png = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
    group.throughput(Throughput::Bytes(png.len() as u64));
    group.bench_function("magic_hit", |b| b.iter(|| db.match_data(black_box(png))));

    let text = vec![b'a'; 4096];
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("magic_miss_4k", |b| {
        b.iter(|| db.match_data(black_box(&text)))
    });

    group.bench_function("guess_type_combined", |b| {
        b.iter(|| db.guess_type(black_box(Some("photo.png")), black_box(Some(png))))
    });

    group.finish();
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
