use std::thread;
use ukkonen_rs::{build, SuffixTree};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_tree_is_send_and_sync() {
    assert_send_sync::<SuffixTree<char>>();
    assert_send_sync::<SuffixTree<u8>>();
}

#[test]
fn test_parallel_queries_share_one_tree() {
    init_logging();

    let text = "the quick brown fox jumps over the lazy dog ".repeat(50);
    let tree = build(text.chars()).unwrap();
    let patterns = ["quick", "lazy dog", "fox jumps", "the", "cat", "dog the"];

    thread::scope(|scope| {
        let handles: Vec<_> = patterns
            .iter()
            .map(|&pattern| {
                let tree = &tree;
                scope.spawn(move || (pattern, tree.find_str(pattern).unwrap().len()))
            })
            .collect();

        for handle in handles {
            let (pattern, count) = handle.join().unwrap();
            assert_eq!(count, text.matches(pattern).count(), "pattern {pattern:?}");
        }
    });
}

#[test]
fn test_large_text_builds() {
    init_logging();

    // LCG so the run is reproducible.
    let mut seed = 12345u64;
    let text: Vec<u8> = (0..20_000)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b"ACGT"[(seed >> 62) as usize]
        })
        .collect();

    let tree = build(text.iter().copied()).unwrap();
    let stats = tree.stats();
    assert_eq!(stats.text_len, text.len());
    assert_eq!(stats.leaves, text.len() + 1);
    assert!(stats.nodes <= 2 * (text.len() + 1));

    assert!(tree.contains(&text[1000..1100]).unwrap());
    assert_eq!(tree.suffix_array().len(), text.len());
}
