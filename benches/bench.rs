// Criterion benchmarks for Foodshare Engine

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foodshare_engine::core::{categorize, find_within_radius, geodesic_distance, Recommender};
use foodshare_engine::models::{CandidateLocation, Coordinates, Listing};

const TITLES: [&str; 6] = [
    "Fresh apples",
    "Sourdough bread",
    "Vegetable soup",
    "Cheddar cheese",
    "Leftover pizza",
    "Orange juice",
];

fn create_listing(id: usize, lat: f64, lon: f64) -> Listing {
    Listing::create(
        id.to_string(),
        TITLES[id % TITLES.len()],
        format!("batch {} from the community kitchen", id),
        "1",
        Coordinates::new(lat, lon).unwrap(),
        Utc::now() + Duration::hours(2),
    )
}

fn bench_geodesic_distance(c: &mut Criterion) {
    let a = Coordinates::new(40.7128, -74.0060).unwrap();
    let b = Coordinates::new(40.72, -74.01).unwrap();

    c.bench_function("geodesic_distance", |bench| {
        bench.iter(|| geodesic_distance(black_box(a), black_box(b)));
    });
}

fn bench_categorize(c: &mut Criterion) {
    c.bench_function("categorize", |b| {
        b.iter(|| categorize(black_box("Leftover chicken soup with fresh bread and a salad")));
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let origin = Coordinates::new(40.7128, -74.0060).unwrap();
    let mut group = c.benchmark_group("recommendations");

    for listing_count in [10, 100, 500, 1000].iter() {
        let listings: Vec<Listing> = (0..*listing_count)
            .map(|i| {
                let offset = (i as f64 * 0.0005) % 0.2;
                create_listing(i, 40.7128 + offset, -74.0060 + offset)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("train", listing_count), &listings, |b, listings| {
            b.iter(|| {
                let mut recommender = Recommender::with_defaults();
                recommender.train(black_box(listings));
                recommender
            });
        });

        let mut recommender = Recommender::with_defaults();
        recommender.train(&listings);
        group.bench_with_input(BenchmarkId::new("query", listing_count), &recommender, |b, r| {
            b.iter(|| r.recommend(black_box(&["apples", "bread"]), black_box(origin)));
        });
    }

    group.finish();
}

fn bench_proximity(c: &mut Criterion) {
    let origin = Coordinates::new(40.7128, -74.0060).unwrap();
    let candidates: Vec<CandidateLocation> = (0..1000)
        .map(|i| CandidateLocation {
            id: i.to_string(),
            latitude: 40.7128 + (i as f64 * 0.0001),
            longitude: -74.0060,
        })
        .collect();

    c.bench_function("find_within_radius_1000", |b| {
        b.iter(|| find_within_radius(origin, black_box(&candidates), 5.0, Some("0")));
    });
}

criterion_group!(
    benches,
    bench_geodesic_distance,
    bench_categorize,
    bench_recommendations,
    bench_proximity
);

criterion_main!(benches);
