use avl_map::TreeMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[100, 10_000];

fn insert_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_rand");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            let mut rng = StdRng::seed_from_u64(n as u64);

            for _ in 0..n {
                let i = rng.gen_range(0..n);
                map.insert(i, i);
            }

            b.iter(|| {
                let k = rng.gen_range(0..n);
                map.insert(k, k);
            });
            black_box(&map);
        });
    }
    group.finish();
}

fn insert_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_seq");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            for i in 0..n { map.insert(i * 2, i * 2); }

            let mut i = 1;
            b.iter(|| {
                map.insert(i, i);
                i = (i + 2) % n;
            });
            black_box(&map);
        });
    }
    group.finish();
}

fn insert_remove_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_rand");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            let mut rng = StdRng::seed_from_u64(n as u64);
            for _ in 0..n { let i = rng.gen_range(0..n); map.insert(i, i); }

            b.iter(|| {
                let k = rng.gen_range(0..n);
                map.insert(k, k);
                black_box(map.remove(&k));
            });
        });
    }
    group.finish();
}

fn find_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_rand");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::new();
            let mut rng = StdRng::seed_from_u64(n as u64);
            let mut keys: Vec<_> = (0..n).map(|_| rng.gen_range(0..n)).collect();

            for &k in &keys { map.insert(k, k); }

            keys.shuffle(&mut rng);

            let mut i = 0;
            b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            });
        });
    }
    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for &n in &[100, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut map = TreeMap::<u32, u32>::new();
            let mut rng = StdRng::seed_from_u64(n as u64);

            for _ in 0..n { map.insert(rng.gen(), rng.gen()); }

            b.iter(|| {
                for entry in map.iter() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, insert_rand, insert_seq, insert_remove_rand, find_rand, iter);
criterion_main!(benches);
