use criterion::{black_box, criterion_group, criterion_main, Criterion};

use intervue_core::model::Feedback;
use intervue_core::scoring::overall_score;
use intervue_core::store::FeedbackStore;

fn make_store(questions: &[String], evaluated: usize) -> FeedbackStore {
    let mut store = FeedbackStore::default();
    for (i, q) in questions.iter().take(evaluated).enumerate() {
        store.record(
            q,
            Feedback {
                sentiment: 0.3,
                keyword_coverage: 0.5,
                score: (i % 100) as f64,
                tips: vec!["Add concrete examples.".into()],
            },
        );
    }
    store
}

fn make_questions(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Question number {i}")).collect()
}

fn bench_overall_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_score");

    for &(total, evaluated) in &[(10usize, 10usize), (100, 100), (100, 50), (1000, 1000)] {
        let questions = make_questions(total);
        let store = make_store(&questions, evaluated);
        group.bench_function(format!("n={total},evaluated={evaluated}"), |b| {
            b.iter(|| overall_score(black_box(&store), black_box(&questions)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overall_score);
criterion_main!(benches);
