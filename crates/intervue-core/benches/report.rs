use criterion::{black_box, criterion_group, criterion_main, Criterion};

use intervue_core::model::Feedback;
use intervue_core::report::build_blocks;
use intervue_core::store::{AnswerStore, FeedbackStore};

fn make_session(n: usize) -> (Vec<String>, AnswerStore, FeedbackStore) {
    let questions: Vec<String> = (0..n).map(|i| format!("Question number {i}")).collect();
    let mut answers = AnswerStore::default();
    let mut feedback = FeedbackStore::default();
    for (i, q) in questions.iter().enumerate() {
        answers.set(q, "I led the migration and measured a 40% latency drop.");
        if i % 2 == 0 {
            feedback.record(
                q,
                Feedback {
                    sentiment: 0.4,
                    keyword_coverage: 0.66,
                    score: 72.0,
                    tips: vec!["Quantify the impact.".into(), "Name the tools.".into()],
                },
            );
        }
    }
    (questions, answers, feedback)
}

fn bench_build_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_blocks");

    for &n in &[10usize, 100, 1000] {
        let (questions, answers, feedback) = make_session(n);
        group.bench_function(format!("questions={n}"), |b| {
            b.iter(|| {
                build_blocks(
                    black_box(&questions),
                    black_box(&answers),
                    black_box(&feedback),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_blocks);
criterion_main!(benches);
