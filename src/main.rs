//! Ladder Engine - CLI
//!
//! Word-ladder pathfinding and AI duels over a dictionary graph.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ladder_engine::{
    ai::Difficulty,
    commands::{BenchConfig, DuelConfig, run_bench, run_duel},
    core::Word,
    engine::Engine,
    output::{print_bench_result, print_duel_result, print_pair, print_path},
};
use rustc_hash::FxHashSet;

#[derive(Parser)]
#[command(
    name = "ladder_engine",
    about = "Word-ladder pathfinding and AI duels over a dictionary graph",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Path {
        start: String,
        end: String,

        /// Use bidirectional BFS instead of A*
        #[arg(short, long)]
        bidirectional: bool,
    },

    /// List the neighbors of a word
    Neighbors { word: String },

    /// Suggest the best next word toward a target
    Hint {
        current: String,
        target: String,

        /// Words already played (excluded from suggestions)
        #[arg(short, long)]
        used: Vec<String>,
    },

    /// Sample a random start/end pair with an interesting ladder
    Pair {
        /// Word length to sample from
        #[arg(short, long, default_value = "4")]
        length: usize,
    },

    /// Score how hard a pair is
    Difficulty { start: String, end: String },

    /// Watch two AI contestants race to the target
    Duel {
        /// First contestant: easy, medium, hard, expert
        #[arg(long, default_value = "medium")]
        first: String,

        /// Second contestant: easy, medium, hard, expert
        #[arg(long, default_value = "hard")]
        second: String,

        /// Word length when sampling a pair (ignored if start/target given)
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Start word (sampled when omitted)
        start: Option<String>,

        /// Target word (sampled when omitted)
        target: Option<String>,
    },

    /// Benchmark pair generation and pathfinding
    Bench {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length to sample from
        #[arg(short, long, default_value = "4")]
        length: usize,
    },
}

fn load_engine(wordlist_mode: &str) -> Result<Engine> {
    let engine = match wordlist_mode {
        "embedded" => Engine::embedded()?,
        path => Engine::from_file(path).with_context(|| format!("loading wordlist {path}"))?,
    };
    Ok(engine)
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("invalid word '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut engine = load_engine(&cli.wordlist)?;

    match cli.command {
        Commands::Path {
            start,
            end,
            bidirectional,
        } => run_path_command(&mut engine, &start, &end, bidirectional),
        Commands::Neighbors { word } => run_neighbors_command(&engine, &word),
        Commands::Hint {
            current,
            target,
            used,
        } => run_hint_command(&mut engine, &current, &target, &used),
        Commands::Pair { length } => run_pair_command(&mut engine, length),
        Commands::Difficulty { start, end } => run_difficulty_command(&mut engine, &start, &end),
        Commands::Duel {
            first,
            second,
            length,
            start,
            target,
        } => run_duel_command(
            &mut engine,
            &first,
            &second,
            length,
            start.as_deref(),
            target.as_deref(),
        ),
        Commands::Bench { count, length } => {
            run_bench_command(&mut engine, length, count);
            Ok(())
        }
    }
}

fn run_path_command(engine: &mut Engine, start: &str, end: &str, bidirectional: bool) -> Result<()> {
    let start = parse_word(start)?;
    let end = parse_word(end)?;

    if !engine.is_valid_word(&start) {
        bail!("'{start}' is not in the dictionary");
    }
    if !engine.is_valid_word(&end) {
        bail!("'{end}' is not in the dictionary");
    }

    let path = if bidirectional {
        engine.find_path_bidirectional(&start, &end)
    } else {
        engine.find_path(&start, &end)
    };

    print_path(&start, &end, path.as_deref());
    Ok(())
}

fn run_neighbors_command(engine: &Engine, word: &str) -> Result<()> {
    let word = parse_word(word)?;
    let neighbors = engine.neighbors(&word);

    if neighbors.is_empty() {
        println!("{word} has no neighbors");
    } else {
        println!("{} neighbors of {word}:", neighbors.len());
        for neighbor in neighbors {
            println!("  {neighbor}");
        }
    }
    Ok(())
}

fn run_hint_command(engine: &mut Engine, current: &str, target: &str, used: &[String]) -> Result<()> {
    let current = parse_word(current)?;
    let target = parse_word(target)?;
    let used: FxHashSet<Word> = used
        .iter()
        .map(|text| parse_word(text))
        .collect::<Result<_>>()?;

    match engine.hint(&current, &target, &used) {
        Some(suggestion) => println!("Try: {suggestion}"),
        None => println!("No unused neighbor available"),
    }
    Ok(())
}

fn run_pair_command(engine: &mut Engine, length: usize) -> Result<()> {
    match engine.generate_random_pair(length) {
        Some(pair) => {
            let difficulty = engine.calculate_difficulty(&pair.start, &pair.end);
            print_pair(&pair, difficulty);
            Ok(())
        }
        None => bail!("no suitable pair of length {length} found"),
    }
}

fn run_difficulty_command(engine: &mut Engine, start: &str, end: &str) -> Result<()> {
    let start = parse_word(start)?;
    let end = parse_word(end)?;

    match engine.calculate_difficulty(&start, &end) {
        Some(score) => {
            println!("Difficulty of {start} → {end}: {score:.1}");
            Ok(())
        }
        None => bail!("no ladder connects {start} and {end}"),
    }
}

fn run_duel_command(
    engine: &mut Engine,
    first: &str,
    second: &str,
    length: usize,
    start: Option<&str>,
    target: Option<&str>,
) -> Result<()> {
    let (start, target) = match (start, target) {
        (Some(start), Some(target)) => (parse_word(start)?, parse_word(target)?),
        _ => {
            let pair = engine
                .generate_random_pair(length)
                .with_context(|| format!("no suitable pair of length {length} found"))?;
            (pair.start, pair.end)
        }
    };

    if !engine.is_valid_word(&start) || !engine.is_valid_word(&target) {
        bail!("both duel words must be in the dictionary");
    }

    let config = DuelConfig::new(
        start,
        target,
        Difficulty::from_name(first),
        Difficulty::from_name(second),
    );

    println!(
        "Duel: {} vs {}, racing {} → {}",
        config.first.name(),
        config.second.name(),
        config.start,
        config.target
    );

    let result = run_duel(engine, &config, &mut rand::rng());
    print_duel_result(&result);
    Ok(())
}

fn run_bench_command(engine: &mut Engine, length: usize, count: usize) {
    println!("Benchmarking {count} random pairs of length {length}...");

    let config = BenchConfig { length, count };
    let result = run_bench(engine, &config, &mut rand::rng());
    print_bench_result(&result);
}
