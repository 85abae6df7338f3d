//! Benchmarks for descriptor parsing and classification.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use tnsurl_core::cursor::Cursor;
use tnsurl_core::descriptor::{DatabaseSpec, parse_descriptor};

const DESCRIPTION: &str = "(DESCRIPTION=(LOAD_BALANCE=on)\
    (ADDRESS=(PROTOCOL=TCP)(HOST=1.2.3.4)(PORT=1521))\
    (ADDRESS=(PROTOCOL=TCP)(HOST=1.2.3.5)(PORT=1522))\
    (CONNECT_DATA=(SERVICE_NAME=service)))";

fn description_list(descriptions: usize) -> String {
    let mut text = String::from("(DESCRIPTION_LIST=(LOAD_BALANCE=off)(FAILOVER=on)");
    for i in 0..descriptions {
        text.push_str(&format!(
            "(DESCRIPTION=(ADDRESS=(PROTOCOL=tcp)(HOST=10.0.{i}.1)(PORT=8629))\
             (ADDRESS=(PROTOCOL=tcp)(HOST=10.0.{i}.2)(PORT=8629))\
             (CONNECT_DATA=(SERVER=DEDICATED)(SERVICE_NAME=svc{i})))"
        ));
    }
    text.push(')');
    text
}

// ============================================================================
// Parsing
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor_parse");

    group.bench_function("description", |b| {
        b.iter(|| black_box(parse_descriptor(black_box(DESCRIPTION))))
    });

    for size in [1, 8, 64] {
        let text = description_list(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("description_list", size), &text, |b, text| {
            b.iter(|| black_box(parse_descriptor(black_box(text))))
        });
    }

    group.finish();
}

// ============================================================================
// Classification
// ============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor_classify");

    for size in [1, 8, 64] {
        let Ok(root) = parse_descriptor(&description_list(size)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("description_list", size), &root, |b, root| {
            b.iter(|| {
                let spec = DatabaseSpec::classify(black_box(root));
                black_box(spec.map(|spec| spec.endpoints().len()))
            })
        });
    }

    group.finish();
}

// ============================================================================
// Cursor
// ============================================================================

fn bench_cursor(c: &mut Criterion) {
    c.bench_function("cursor_flat_split", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box("jdbc:tibero:thin:@localhost:8629:tibero"));
            cursor.after_literal("jdbc:tibero:").after(':').after('@');
            let host = cursor.before(&[':']).value();
            let port = cursor.next().after(':').before(&[':', '/']).value();
            let db = cursor.next().after_last(&[':', '/']).value();
            black_box((host, port, db))
        })
    });
}

criterion_group!(benches, bench_parse, bench_classify, bench_cursor);
criterion_main!(benches);
