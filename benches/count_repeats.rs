mod utils;

use criterion::{criterion_group, criterion_main, Criterion};
use nearmiss::Searcher;
use utils::random_dna;

static LENGTHS: &[usize] = &[4096, 65536, 524_288];
static MAX_DISTANCES: &[usize] = &[0, 1, 2];

fn count_repeats(crit: &mut Criterion) {
    for &len in LENGTHS {
        let text = random_dna(len);
        let searcher = Searcher::new(&text[..]);
        let anchor = b"GG".to_vec();

        for &k in MAX_DISTANCES {
            let bench_name = format!("count_repeats {}b k={}", len, k);
            let anchor = anchor.clone();
            crit.bench_function(bench_name.as_ref(), move |b| {
                b.iter(|| {
                    searcher
                        .find_repeat_counts(&anchor[..], (-20, -1), k, None)
                        .unwrap()
                });
            });
        }
    }
}

criterion_group!(count_repeats_benches, count_repeats);
criterion_main!(count_repeats_benches);
