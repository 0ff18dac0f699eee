use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crypto_mention_counter::{count_mentions_in_comments, CoinSymbolList, Comment};

fn benchmark_count_mentions(c: &mut Criterion) {
    let coin_symbol_list: CoinSymbolList = vec![
        ("BTC".to_string(), Some("Bitcoin".to_string()), true),
        ("ETH".to_string(), Some("Ethereum".to_string()), true),
        ("DOGE".to_string(), Some("Dogecoin".to_string()), true),
    ];

    let comments: Vec<Comment> = (0..100)
        .map(|i| {
            Comment::new(
                &format!("c{}", i),
                "commenter",
                "BTC keeps running while eth lags, see https://example.com/charts first.\n\
                 > quoted reply pushing DOGE\n\
                 Maybe $PEPE instead, fees paid in `ETH` aside.",
            )
        })
        .collect();

    c.bench_function("count_mentions", |b| {
        b.iter(|| count_mentions_in_comments(black_box(&comments), black_box(&coin_symbol_list)))
    });
}

criterion_group!(benches, benchmark_count_mentions);
criterion_main!(benches);
