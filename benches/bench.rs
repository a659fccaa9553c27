// Criterion benchmarks for the numerology engine

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use numerology_match::core::{build_roster_view, calculate_destiny, calculate_life_path, RosterQuery};
use numerology_match::models::{CompatibilityBand, NumerologyNumber, Profile, SortMode};

fn create_candidate(id: usize) -> Profile {
    let numbers = NumerologyNumber::ALL;
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 20 + (id % 30) as u8,
        bio: String::new(),
        avatar: String::new(),
        birth_date: None,
        life_path: numbers[id % numbers.len()],
        destiny: numbers[(id * 7) % numbers.len()],
    }
}

fn bench_life_path(c: &mut Criterion) {
    c.bench_function("life_path", |b| {
        b.iter(|| calculate_life_path(black_box("1996-03-15")));
    });
}

fn bench_destiny(c: &mut Criterion) {
    c.bench_function("destiny_cyrillic", |b| {
        b.iter(|| calculate_destiny(black_box("Александра Константиновна")));
    });
    c.bench_function("destiny_latin", |b| {
        b.iter(|| calculate_destiny(black_box("Alexandra Konstantinovna")));
    });
}

fn bench_roster_view(c: &mut Criterion) {
    let query = RosterQuery::new(
        Some(NumerologyNumber::Seven),
        CompatibilityBand::All,
        SortMode::CompatibilityDesc,
    );

    let mut group = c.benchmark_group("roster_view");

    for candidate_count in [10, 100, 1000, 10000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("build_roster_view", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| build_roster_view(black_box(&candidates), black_box(&query)).entries.len());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_life_path,
    bench_destiny,
    bench_roster_view
);

criterion_main!(benches);
