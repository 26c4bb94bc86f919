// Engine build and search benchmarks over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mixtail_core::{Recipe, Recommender};
use rand::prelude::*;

const POOL_SIZE: usize = 150;

fn ingredient_pool() -> Vec<String> {
    (0..POOL_SIZE).map(|i| format!("ingredient-{i}")).collect()
}

fn generate_catalog(size: usize) -> Vec<Recipe> {
    let pool = ingredient_pool();
    let mut rng = rand::rng();

    (0..size)
        .map(|id| {
            let count = rng.random_range(3..=8);
            let ingredients: Vec<String> = pool
                .choose_multiple(&mut rng, count)
                .cloned()
                .collect();
            Recipe {
                id: id as u64,
                name: format!("cocktail-{id}"),
                category: "Ordinary Drink".to_string(),
                alcoholic: "Alcoholic".to_string(),
                glass_type: "Cocktail glass".to_string(),
                instructions: String::new(),
                measures: ingredients.iter().map(|_| "1 oz".to_string()).collect(),
                ingredients,
                thumbnail: String::new(),
            }
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("mixtail", size), size, |b, _| {
            b.iter(|| Recommender::new(black_box(catalog.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 10000].iter() {
        let engine = Recommender::new(generate_catalog(*size)).unwrap();
        let query = ["ingredient-1", "ingredient-7", "ingredient-42"];

        group.bench_with_input(BenchmarkId::new("mixtail", size), size, |b, _| {
            b.iter(|| {
                engine
                    .search_by_ingredients(black_box(&query), 5)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_search);
criterion_main!(benches);
