use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ngidx::{build_index, compute_window, search, ExtractError, Field, Fields};

const NAMES: [&str; 8] = [
    "Priya Sharma",
    "Rahul Verma",
    "Ananya Iyer",
    "Vikram Singh",
    "Meera Nair",
    "Arjun Mehta",
    "Kavya Reddy",
    "Rohan Gupta",
];

const MESSAGES: [&str; 5] = [
    "Is the property still available?",
    "Please call me back tomorrow",
    "What is the final price?",
    "Thanks, I will visit on Sunday",
    "Send the brochure on whatsapp",
];

const STATUSES: [&str; 4] = ["Hot", "Warm", "Cold", "New"];

struct Lead {
    phone: String,
    name: String,
    message: String,
    status: String,
}

fn get_test_corpus(size: usize) -> Vec<Lead> {
    (0..size)
        .map(|n| Lead {
            phone: format!("+91981{:07}", n * 7919 % 10_000_000),
            name: NAMES[n % NAMES.len()].to_string(),
            message: MESSAGES[n % MESSAGES.len()].to_string(),
            status: STATUSES[n % STATUSES.len()].to_string(),
        })
        .collect()
}

fn fields(lead: &Lead) -> Fields {
    vec![
        Field::from(&lead.phone),
        Field::from(&lead.name),
        Field::from(&lead.message),
        Field::from(&lead.status),
    ]
}

fn fallback(lead: &Lead) -> Result<Fields, ExtractError> {
    Ok(fields(lead))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build-index");

    for size in [100, 1_000] {
        let corpus = get_test_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| build_index(black_box(corpus), fields))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let corpus = get_test_corpus(1_000);
    let index = build_index(&corpus, fields);

    // Indexed substring, short key scan, and a miss.
    for query in ["sharma", "ve", "zzzz"] {
        c.bench_function(&format!("search-{query}"), |b| {
            b.iter(|| search(black_box(query), &index, &corpus, fallback))
        });
    }
}

fn bench_window(c: &mut Criterion) {
    c.bench_function("compute-window", |b| {
        b.iter(|| compute_window(black_box(10_000), 50.0, 500.0, black_box(123_456.0)))
    });
}

criterion_group!(benches, bench_build, bench_search, bench_window);
criterion_main!(benches);
