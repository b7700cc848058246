use sequence_increment::progression::incremented;
use sequence_increment::{
    add_incremented_sequence_to_items, increment_with, Affixes, Alphabet,
    CustomAlphabetIncrement, FixedAlphabetIncrement, IncrementOptions, Incrementer, Position,
};
use std::env;
use tracing_subscriber::EnvFilter;

/// Labels each command-line argument with an incremented sequence.
///
/// Usage: cargo run --example labels [first-value] <item>...
///
/// Set `RUST_LOG=sequence_increment=debug` to see growth events.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "A".to_string());
    let items: Vec<String> = args.collect();

    let options = IncrementOptions::new().grow_on_overflow(true);
    let mut inc = FixedAlphabetIncrement::with_options(&first, options).unwrap_or_else(|e| {
        eprintln!("Cannot start at \"{}\": {}", first, e);
        std::process::exit(1);
    });

    if items.is_empty() {
        let affixes = Affixes {
            prefix: "report",
            prefix_separator: "_",
            extension: ".csv",
            ..Affixes::default()
        };
        for _ in 0..5 {
            println!("{}", increment_with(&mut inc, &affixes));
        }
    } else {
        for line in add_incremented_sequence_to_items(&mut inc, &items, ". ", Position::Before) {
            println!("{}", line);
        }
    }
    println!("({} values generated)\n", inc.count());

    let roman = Alphabet::new(["i", "ii", "iii", "iv", "v", "vi"]).expect("distinct tokens");
    let mut chapters = CustomAlphabetIncrement::new(roman);
    let headings: Vec<String> = chapters.iter().take(6).collect();
    println!("Chapters: {}", headings.join(", "));

    let pages = [12, 4, 8, 16, 20];
    match incremented(&pages) {
        Some(info) if info.is_incremented() => println!(
            "Pages {:?} step by {} from {} to {} (in order: {})",
            pages,
            info.step(),
            info.first_value(),
            info.last_value(),
            info.is_sorted()
        ),
        _ => println!("Pages {:?} are not evenly spaced", pages),
    }
}
