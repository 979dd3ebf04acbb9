//! Benchmark for the structure extraction pipeline.
//!
//! Runs the full walk (module discovery, protocol parse, declaration parse)
//! over in-memory trees of increasing size, so the numbers reflect parsing
//! and assembly cost rather than disk latency.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use servicemap::extract::StructureExtractor;
use servicemap::testkit::MemoryFileSystem;
use std::hint::black_box;
use std::path::Path;

const MODELS: &str = r#"package models

import "github.com/google/uuid"

type Record struct {
	ID uuid.UUID
}

type RecordData struct {
	ID    uuid.UUID `gorm:"primaryKey"`
	Label string
	Tags  []string
}
"#;

const PROTO: &str = r#"syntax = "proto3";

message Record {
    string id = 1;
}

enum RecordState {
    NEW = 0;
    ARCHIVED = 1;
}
"#;

const SERVICES_PER_MODULE: usize = 4;

fn project_tree(modules: usize) -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();
    for m in 0..modules {
        for s in 0..SERVICES_PER_MODULE {
            fs = fs
                .with_file(
                    format!("project/services/m{m}.v1/svc{s}/models/models.go"),
                    MODELS,
                )
                .with_file(
                    format!("project/services/m{m}.v1/svc{s}/proto/m{m}_v1_svc{s}.proto"),
                    PROTO,
                );
        }
    }
    fs
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_structure");
    for modules in [1usize, 4, 16] {
        let fs = project_tree(modules);
        group.throughput(Throughput::Elements((modules * SERVICES_PER_MODULE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(modules), &fs, |b, fs| {
            b.iter(|| {
                let extractor = StructureExtractor::new(fs.clone());
                black_box(extractor.extract(Path::new("project")).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_extract);
criterion_main!(benches);
