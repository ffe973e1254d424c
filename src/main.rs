use std::borrow::Cow;
use std::hash::BuildHasher;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use markov::scanner::{self, MappedInput};
use markov::{Chain, Config, Result, DEFAULT_BUCKETS, DEFAULT_PREFIX_LEN, DEFAULT_WORD_LIMIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HashKind {
    /// Deterministic multiplicative string hash
    Djb2,
    /// Randomly keyed aHash
    Ahash,
}

/// Generate random text that mimics the input, using a Markov chain over words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input text file, or `-` to read standard input
    input: PathBuf,

    /// Maximum number of words to generate
    #[arg(short, long, default_value_t = DEFAULT_WORD_LIMIT)]
    words: usize,

    /// Number of words of context
    #[arg(short = 'n', long, default_value_t = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,

    /// Hash table size
    #[arg(short, long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hash function used to place prefixes in buckets
    #[arg(long, value_enum, default_value_t = HashKind::Djb2)]
    hasher: HashKind,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            prefix_len: self.prefix_len,
            buckets: self.buckets,
            word_limit: self.words,
            seed: self.seed,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let mapped;
    let text = if args.input.as_os_str() == "-" {
        Cow::Owned(scanner::read_text(io::stdin().lock())?)
    } else {
        mapped = MappedInput::open(&args.input)?;
        log::debug!("mapped {} ({} bytes)", args.input.display(), mapped.len());
        mapped.text()
    };

    let tokens = scanner::words(&text);
    match args.hasher {
        HashKind::Djb2 => emit(&Chain::build_with(&config, tokens)?, &config),
        HashKind::Ahash => emit(
            &Chain::build_with_hasher(&config, ahash::RandomState::new(), tokens)?,
            &config,
        ),
    }
}

fn emit<S: BuildHasher>(chain: &Chain<S>, config: &Config) -> Result<()> {
    log::info!(
        "build done: {} prefixes, {} observations",
        chain.index().len(),
        chain.index().observations()
    );

    let rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = chain.write_to(&mut out, config.word_limit, rng)?;
    writeln!(out)?;
    out.flush()?;

    log::info!("generated {} words", written);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("markov: {}", err);
        process::exit(1);
    }
}
