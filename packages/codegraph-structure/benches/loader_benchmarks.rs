//! Loader benchmarks
//!
//! - Java parsing of one declaration-heavy file
//! - Sequential vs parallel load of many files

use std::fs;

use codegraph_structure::{JavaSourceParser, LoaderConfig, ProgramLoader, SourceParser};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

fn java_class(package: &str, name: &str, methods: usize) -> String {
    let mut out = format!("package {package};\n\npublic class {name} {{\n    private int count;\n");
    for i in 0..methods {
        out.push_str(&format!(
            "    public int method{i}(int a, java.util.List<String> b) {{\n        return a + {i};\n    }}\n"
        ));
    }
    out.push_str("}\n");
    out
}

fn bench_parse(c: &mut Criterion) {
    let parser = JavaSourceParser::new();
    let source = java_class("bench", "Big", 200);

    c.bench_function("parse_java_200_methods", |b| {
        b.iter(|| black_box(parser.parse(black_box(&source), "Big.java")))
    });
}

fn bench_load(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let paths: Vec<_> = (0..64)
        .map(|i| {
            let path = dir.path().join(format!("C{i}.java"));
            fs::write(&path, java_class(&format!("pkg{}", i % 4), &format!("C{i}"), 20)).unwrap();
            path
        })
        .collect();

    let mut group = c.benchmark_group("load_64_files");
    for parallel in [false, true] {
        let loader = ProgramLoader::java(LoaderConfig::default().parallel_parse(parallel));
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &paths,
            |b, paths| b.iter(|| black_box(loader.load("bench", paths))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_load);
criterion_main!(benches);
