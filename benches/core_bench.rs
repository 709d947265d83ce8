use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mask_map_locator::feed::{FeatureGeometry, FeatureProperties, PharmacyFeature};
use mask_map_locator::{cluster_markers, normalize, GeoPoint, MapCamera};
use std::hint::black_box;

fn build_synthetic_features(count: usize) -> Vec<PharmacyFeature> {
    (0..count)
        .map(|index| {
            let column = (index % 100) as f64;
            let row = (index / 100) as f64;
            let lng = 121.45 + column * 0.002;
            let lat = 24.95 + row * 0.002;

            PharmacyFeature {
                geometry: FeatureGeometry {
                    coordinates: [lng, lat],
                },
                properties: FeatureProperties {
                    id: format!("59010{index:05}"),
                    name: format!("藥局 {index}"),
                    address: "臺北市大安區信義路三段100號".to_string(),
                    phone: "02 2700 1234".to_string(),
                    note: String::new(),
                    mask_adult: (index % 160) as i64,
                    mask_child: (index % 40) as i64,
                    updated: "2020/02/21 14:42".to_string(),
                },
            }
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let features = build_synthetic_features(10_000);

    c.bench_function("normalize_10k_features", |b| {
        b.iter(|| {
            let records = normalize(black_box(features.clone()));
            black_box(records.len())
        })
    });
}

fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster_markers");

    for &record_count in &[10_000usize, 50_000usize] {
        let records = normalize(build_synthetic_features(record_count));
        let camera = MapCamera::new(GeoPoint::new(25.05, 121.55), 12.0);

        group.bench_with_input(
            BenchmarkId::new("viewport_800x600", record_count),
            &records,
            |b, records| {
                b.iter(|| {
                    let groups =
                        cluster_markers(black_box(records), &camera, [800.0, 600.0], 48.0);
                    black_box(groups.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_clustering);
criterion_main!(benches);
