//! Criterion benchmarks for the newsvote classifier.
//!
//! Covers the three hot paths:
//! - Text normalization
//! - Scoring articles against a trained model
//! - Staging and applying training batches

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use newsvote::analysis::normalizer::TextNormalizer;
use newsvote::ml::classifier::{Article, LabeledArticle, TextClassifier};

/// Generate test articles for benchmarking.
fn generate_test_articles(count: usize) -> Vec<LabeledArticle> {
    let words = [
        "rocket",
        "launch",
        "orbit",
        "compiler",
        "release",
        "kernel",
        "patch",
        "quantum",
        "processor",
        "children",
        "went",
        "machine",
        "learning",
        "isn't",
        "it's",
        "&amp;",
        "<b>breaking</b>",
        "2024",
        "tax",
        "deadline",
        "earnings",
        "quarterly",
        "gossip",
        "celebrity",
        "weather",
        "traffic",
        "meeting",
        "budget",
        "committee",
        "report",
        "forecast",
        "holiday",
    ];

    let mut articles = Vec::with_capacity(count);
    for i in 0..count {
        let length = 20 + (i % 40); // Variable length summaries
        let mut summary = Vec::with_capacity(length);

        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            summary.push(words[word_idx]);
        }

        let title = format!("{} {}", words[i % words.len()], words[(i * 3) % words.len()]);
        let category = if i % 3 == 0 { "interesting" } else { "boring" };
        articles.push(LabeledArticle::new(
            Article::new(title, summary.join(" ")),
            category,
        ));
    }

    articles
}

fn new_classifier() -> TextClassifier {
    let normalizer = Arc::new(TextNormalizer::new().unwrap());
    TextClassifier::new(normalizer, ["interesting", "boring"]).unwrap()
}

/// Benchmark text normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = TextNormalizer::new().unwrap();
    let articles = generate_test_articles(1000);
    let texts: Vec<String> = articles.iter().map(|a| a.article.text()).collect();

    group.bench_function("normalize_single_article", |b| {
        b.iter(|| {
            let result = normalizer.normalize(black_box(&texts[0]));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("normalize_batch_articles", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let result = normalizer.normalize(black_box(text));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark scoring against a trained model.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");

    let articles = generate_test_articles(1000);
    let mut classifier = new_classifier();
    classifier.train(&articles).unwrap();

    let features = classifier.article_features(&articles[1].article).unwrap();

    group.bench_function("score_features", |b| {
        b.iter(|| black_box(classifier.score(black_box(&features))))
    });

    group.bench_function("score_one_feature", |b| {
        b.iter(|| black_box(classifier.score_one(black_box("rocket"))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_batch_articles", |b| {
        b.iter(|| {
            for labeled in articles.iter().take(100) {
                let result = classifier.classify_article(black_box(&labeled.article));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark staging and applying training batches.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20); // Each iteration normalizes the whole batch

    for size in [100, 500].iter() {
        let articles = generate_test_articles(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(format!("add_and_apply_{size}_articles"), size, |b, _| {
            b.iter_batched(
                new_classifier,
                |mut classifier| {
                    classifier.add_articles(&articles).unwrap();
                    classifier.apply_changes();
                    black_box(classifier)
                },
                BatchSize::SmallInput,
            )
        });
    }

    let articles = generate_test_articles(500);
    let mut trained = new_classifier();
    trained.train(&articles).unwrap();
    let extra = Article::new("Rocket launch", "A new orbit record");

    group.bench_function("mark_and_unmark_single_article", |b| {
        b.iter_batched(
            || trained.clone(),
            |mut classifier| {
                classifier.add_article(&extra, "interesting").unwrap();
                classifier.apply_changes();
                classifier.remove_article(&extra, "interesting").unwrap();
                classifier.apply_changes();
                black_box(classifier)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_scoring, bench_training);
criterion_main!(benches);
