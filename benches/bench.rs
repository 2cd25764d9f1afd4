// Criterion benchmarks for College Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use college_match::core::{Recommender, eligibility::filter_eligible, scoring::calculate_match_score};
use college_match::models::{Choice, Exam, Institution, InstitutionType, Region, StudentPreferences};

const EXAMS: [Exam; 5] = [Exam::JeeMain, Exam::Wbjee, Exam::MhtCet, Exam::Bitsat, Exam::Kcet];
const REGIONS: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

fn create_institution(id: usize) -> Institution {
    Institution {
        id: id.to_string(),
        name: format!("College {}", id),
        short_name: format!("C{}", id),
        kind: InstitutionType::Private,
        city: "City".to_string(),
        state: if id % 2 == 0 { "Karnataka" } else { "Maharashtra" }.to_string(),
        region: REGIONS[id % REGIONS.len()],
        exams: vec![EXAMS[id % EXAMS.len()]],
        max_rank: 1000 + (id as u32 % 50) * 1000,
        total_fee: 200000.0 + (id % 40) as f64 * 50000.0,
        avg_package: 8.0,
        highest_package: 30.0,
        placement_rate: 70.0 + (id % 30) as f64,
        nirf_ranking: 1 + (id as u32 % 150),
        branches: vec!["Computer Science".to_string(), "Electronics".to_string()],
        scholarships: id % 3 == 0,
        website: String::new(),
    }
}

fn create_preferences() -> StudentPreferences {
    StudentPreferences {
        exam: Exam::JeeMain,
        rank: 8000,
        max_budget: 1200000.0,
        region: Choice::Only(Region::South),
        preferred_state: Choice::Only("Karnataka".to_string()),
        branch: Choice::Only("electronics".to_string()),
    }
}

fn bench_match_score(c: &mut Criterion) {
    let institution = create_institution(7);
    let preferences = create_preferences();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&institution), black_box(&preferences)));
    });
}

fn bench_eligibility(c: &mut Criterion) {
    let catalog: Vec<Institution> = (0..1000).map(create_institution).collect();

    c.bench_function("filter_eligible_1000", |b| {
        b.iter(|| filter_eligible(black_box(&catalog), black_box(Exam::JeeMain)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_policy();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Institution> = (0..*catalog_size).map(create_institution).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&catalog), black_box(&preferences)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_eligibility, bench_recommend);

criterion_main!(benches);
