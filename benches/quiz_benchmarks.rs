use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use verbdrill::engine::answer;
use verbdrill::engine::progress::ProgressTracker;
use verbdrill::session::quiz::QuizSession;
use verbdrill::vocab::Vocabulary;

/// Tracker with every other verb mastered.
fn half_mastered(vocab: &Vocabulary) -> ProgressTracker {
    let mut tracker = ProgressTracker::in_memory();
    for verb in vocab.entries().iter().step_by(2) {
        tracker.mark_mastered(&verb.base, vocab);
    }
    tracker
}

fn bench_unmastered_pool(c: &mut Criterion) {
    let vocab = Vocabulary::builtin().unwrap();
    let tracker = half_mastered(&vocab);

    c.bench_function("unmastered_pool_half_mastered", |b| {
        b.iter(|| black_box(tracker.unmastered_pool(black_box(&vocab))).len())
    });
}

fn bench_select_next(c: &mut Criterion) {
    let vocab = Vocabulary::builtin().unwrap();
    let tracker = half_mastered(&vocab);
    let mut session = QuizSession::new(vocab, tracker);
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("select_next", |b| {
        b.iter(|| {
            session.select_next(&mut rng);
            black_box(session.current_verb().is_some())
        })
    });
}

fn bench_answer_matching(c: &mut Criterion) {
    let vocab = Vocabulary::builtin().unwrap();
    let inputs: Vec<String> = vocab
        .entries()
        .iter()
        .map(|v| format!("  {}  ", v.past_participle[0].to_uppercase()))
        .collect();

    c.bench_function("judge_all_participles", |b| {
        b.iter(|| {
            vocab
                .entries()
                .iter()
                .zip(&inputs)
                .filter(|(verb, input)| answer::is_accepted(input, &verb.past_participle))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_unmastered_pool,
    bench_select_next,
    bench_answer_matching
);
criterion_main!(benches);
