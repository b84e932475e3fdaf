use criterion::{criterion_group, criterion_main, Criterion};

use rollpass::generator::{generate_passphrases, GenerationRequest, DEFAULT_COMPLEX_CHARS};
use rollpass::wordlist::WordList;

fn full_wordlist() -> WordList {
    let mut text = String::new();
    for a in 1..=6 {
        for b in 1..=6 {
            for c in 1..=6 {
                for d in 1..=6 {
                    for e in 1..=6 {
                        text.push_str(&format!("{a}{b}{c}{d}{e}\tword{a}{b}{c}{d}{e}\n"));
                    }
                }
            }
        }
    }
    WordList::parse(&text).unwrap()
}

fn criterion_benchmark_generate_100(c: &mut Criterion) {
    let wordlist = full_wordlist();
    let request = GenerationRequest::new(19, 100, false, DEFAULT_COMPLEX_CHARS).unwrap();

    c.bench_function("generate 100 passphrases", |b| {
        b.iter(|| generate_passphrases(&request, &wordlist).unwrap())
    });
}

fn criterion_benchmark_generate_100_complex(c: &mut Criterion) {
    let wordlist = full_wordlist();
    let request = GenerationRequest::new(19, 100, true, DEFAULT_COMPLEX_CHARS).unwrap();

    c.bench_function("generate 100 complex passphrases", |b| {
        b.iter(|| generate_passphrases(&request, &wordlist).unwrap())
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate_100,
    criterion_benchmark_generate_100_complex
);
criterion_main!(benches);
