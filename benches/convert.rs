use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenji_core::SyllableMapper;

/// Every recognized mora: 5 vowels, 35 consonant+vowel pairs, 5 glides,
/// and the moraic nasal.
fn valid_tokens() -> Vec<String> {
    let mut tokens: Vec<String> = "AIUEO".chars().map(String::from).collect();
    for c in "KSTNHMR".chars() {
        for v in "AIUEO".chars() {
            tokens.push(format!("{c}{v}"));
        }
    }
    tokens.extend(["YA", "YU", "YO", "WA", "WO", "N"].map(String::from));
    tokens
}

fn bench_convert(c: &mut Criterion) {
    let mapper = SyllableMapper::new();
    let tokens = valid_tokens();

    c.bench_function("convert_full_syllabary", |b| {
        b.iter(|| {
            for token in &tokens {
                let _ = black_box(mapper.convert(token));
            }
        })
    });

    c.bench_function("convert_miss", |b| {
        b.iter(|| black_box(mapper.convert("KYA")))
    });

    c.bench_function("mapper_new", |b| b.iter(SyllableMapper::new));
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
