//! Microbenchmark of the matching strategies alone, without I/O or
//! allocation of candidate lines.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use runematch::prelude::*;

const SEGMENTS: [&str; 12] = [
    "src", "tests", "engine", "fuzzyMatcher", "item_list", "Cargo", "statusline", "preview", "lib", "options",
    "tuikit", "README",
];

fn load_lines() -> Vec<Vec<char>> {
    (0..50_000usize)
        .map(|i| {
            let depth = 2 + i % 4;
            let path: Vec<&str> = (0..depth).map(|d| SEGMENTS[(i * 7 + d * 5) % SEGMENTS.len()]).collect();
            format!("{}/file_{i}.rs", path.join("/")).chars().collect()
        })
        .collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let lines = load_lines();

    for algorithm in Algorithm::ALL {
        for (name, forward) in [("forward", true), ("backward", false)] {
            let pattern = Pattern::new("test", CaseMatching::Smart);
            c.bench_function(&format!("micro_{algorithm}_{name}"), |b| {
                b.iter(|| {
                    let mut count = 0u64;
                    for line in &lines {
                        let result = algorithm.run(pattern.case_sensitive(), forward, black_box(line), pattern.runes());
                        if result.is_match() {
                            count += 1;
                        }
                    }
                    count
                });
            });
        }
    }
}

fn bench_matcher(c: &mut Criterion) {
    let lines: Vec<String> = load_lines().into_iter().map(|l| l.into_iter().collect()).collect();

    c.bench_function("micro_matcher_str", |b| {
        let m = Matcher::new("engopt", MatchOptions::default());
        b.iter(|| {
            let mut penalty = 0i64;
            for line in &lines {
                penalty += i64::from(m.match_str(black_box(line)).penalty);
            }
            penalty
        });
    });

    c.bench_function("micro_matcher_str_normalize", |b| {
        let options = MatchOptionsBuilder::default().normalize(true).build().unwrap();
        let m = Matcher::new("engopt", options);
        b.iter(|| {
            let mut penalty = 0i64;
            for line in &lines {
                penalty += i64::from(m.match_str(black_box(line)).penalty);
            }
            penalty
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_algorithms, bench_matcher
);
criterion_main!(benches);
