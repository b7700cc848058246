use sequence_increment::{Incrementer, PermutationSequencer};
use std::env;
use tracing_subscriber::EnvFilter;

/// Walks every arrangement of a word, starting from the word itself.
///
/// Usage: cargo run --example permutations <word>
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <word>", args[0]);
        std::process::exit(1);
    }

    let word = &args[1];
    let mut perms = PermutationSequencer::new(word).unwrap_or_else(|e| {
        eprintln!("Cannot permute \"{}\": {}", word, e);
        std::process::exit(1);
    });

    let total = perms.permutations().len();
    println!(
        "\"{}\" is arrangement {} of {}",
        word,
        perms.current_index() + 1,
        total
    );

    for (i, arrangement) in perms.iter().take(total).enumerate() {
        println!("{:>6}  {}", i + 1, arrangement);
    }

    println!("\n=== Statistics ===");
    println!("Arrangements: {}", total);
    println!("Calls made: {}", perms.count());
    println!("Cycle closes: {}", perms.increment() == *word);
}
