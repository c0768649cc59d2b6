use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use roster::data::{normalize_student, RosterPaths};
use roster::fetch::MemoryFetcher;
use roster::rng::Rng;
use roster::view::{render_roster, roster_container};
use serde_json::{json, Value};

fn raw_students(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let link = if i % 2 == 0 {
                format!("github.com/s{i}")
            } else {
                String::new()
            };
            let photo = if i % 3 == 0 {
                "default.gif".to_string()
            } else {
                format!("s{i}.png")
            };
            json!({
                "name": format!("Student {}", count - i),
                "major": "Computer Science",
                "grad_year": 2020 + (i % 8),
                "link_url": link,
                "photo": photo,
            })
        })
        .collect()
}

fn bench_normalize_and_render(c: &mut Criterion) {
    let raw = raw_students(200);
    c.bench_function("normalize_and_render_200", |b| {
        b.iter(|| {
            let mut rng = Rng::new(7);
            let students: Vec<_> = raw
                .iter()
                .filter_map(|value| normalize_student("bench", value, &mut rng).ok())
                .collect();
            let mut container = roster_container();
            render_roster(&mut container, &students);
            black_box(container.to_html())
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let raw = raw_students(200);
    let mut fetcher = MemoryFetcher::new();
    let mut manifest = Vec::new();
    for (i, value) in raw.into_iter().enumerate() {
        let file = format!("s{i}.json");
        fetcher = fetcher.with_json(format!("data/students/{file}"), value);
        manifest.push(file);
    }
    let fetcher = fetcher.with_json("data/students/index.json", json!(manifest));
    let fetcher = &fetcher;
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

    c.bench_function("load_200_from_memory", |b| {
        b.to_async(&runtime).iter(|| async move {
            let mut rng = Rng::new(7);
            let students = roster::data::load_students(fetcher, RosterPaths::default(), &mut rng)
                .await
                .expect("load");
            black_box(students.len())
        })
    });
}

criterion_group!(benches, bench_normalize_and_render, bench_load);
criterion_main!(benches);
