use std::env;
use std::fs;
use ukkonen_rs::SuffixTreeBuilder;

/// Builds a suffix tree over a file and looks up patterns in it.
///
/// Usage: cargo run --example suffixes <filename> [pattern...]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <filename> [pattern...]", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];

    let data = fs::read(filename).unwrap_or_else(|_| {
        eprintln!("File \"{}\" not found.", filename);
        std::process::exit(1);
    });

    let mut builder = SuffixTreeBuilder::new();
    for (count, &byte) in data.iter().enumerate() {
        builder.push(byte);

        // Print progress every 100,000 bytes
        if (count + 1) % 100_000 == 0 {
            println!("{}", count + 1);
        }
    }

    let tree = match builder.finish() {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    for pattern in &args[2..] {
        match tree.find_all(pattern.as_bytes()) {
            Ok(offsets) if offsets.is_empty() => println!("{:?}: not found", pattern),
            Ok(offsets) => println!(
                "{:?}: {} occurrence(s), first at byte {}",
                pattern,
                offsets.len(),
                offsets[0]
            ),
            Err(err) => eprintln!("{:?}: {}", pattern, err),
        }
    }

    let stats = tree.stats();
    let repeat = tree.longest_repeat();

    println!("\n=== Statistics ===");
    println!("Total bytes indexed: {}", stats.text_len);
    println!("Nodes: {}", stats.nodes);
    println!("Internal nodes: {}", stats.internal_nodes);
    println!("Leaves: {}", stats.leaves);
    println!("Suffix links: {}", stats.suffix_links);
    println!("Nodes per byte: {:.2}", stats.nodes_per_symbol());
    println!(
        "Longest repeat: {} bytes {:?}",
        repeat.len(),
        String::from_utf8_lossy(&repeat)
    );
}
