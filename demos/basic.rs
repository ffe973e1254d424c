use markov::{scanner, Chain, Config, Token};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() {
    let text = "the cat sat on the mat the cat ran to the mat and the cat sat down";

    // Build a chain with:
    // - prefix_len=2 (two words of context)
    // - buckets=4093 (size of hash table, larger values mean shorter chains)
    let config = Config::default();
    let chain = match Chain::build_with(&config, scanner::words(text)) {
        Ok(chain) => chain,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    println!("{} prefixes, {} observations", chain.index().len(), chain.index().observations());

    // Same seed, same text
    for seed in 0..3 {
        let words = chain.generate(50, SmallRng::seed_from_u64(seed));
        println!("seed {}: {}", seed, words.join(" "));
    }

    // Suffixes recorded for one prefix, newest first
    let prefix: [Token; 2] = ["the".into(), "cat".into()];
    if let Some(state) = chain.index().lookup(&prefix) {
        let suffixes: Vec<String> = state.suffixes().map(|t| t.to_string()).collect();
        println!("after 'the cat': {:?}", suffixes);
    }
}
