//! Benchmark harness for the Sass scanner.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p sasslight_scanner

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sasslight_scanner::{Scanner, Scope};

/// Small stylesheet for micro-benchmarks.
const SMALL_SOURCE: &str = "html { color: red; background-color: #333; }";

/// Medium stylesheet exercising most rule kinds.
const MEDIUM_SOURCE: &str = r#"
@mixin silly-links {
  a {
    color: blue;
    background-color: red;
  }
}

body {
  background-image: url();
  font-family: Verdana, Geneva, Arial, Helvetica, sans-serif;
}

.main {
  border: 1px dotted #222222;
  margin: 5px;
}

#data
  +table-scaffolding

!blue = #3bbfce
"#;

fn scan_source(src: &str) -> usize {
    let mut scanner = Scanner::new();
    scanner
        .set_range(src, 0, src.chars().count())
        .expect("bench range is valid");
    let mut count = 0;
    while scanner.next_token() != Scope::Eof {
        count += 1;
    }
    count
}

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_small", |b| {
        b.iter(|| scan_source(black_box(SMALL_SOURCE)))
    });

    c.bench_function("scan_medium", |b| {
        b.iter(|| scan_source(black_box(MEDIUM_SOURCE)))
    });

    let large: String = MEDIUM_SOURCE.repeat(200);
    c.bench_function("scan_large", |b| b.iter(|| scan_source(black_box(&large))));
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
