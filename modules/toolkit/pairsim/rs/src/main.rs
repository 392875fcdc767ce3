use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use eyre::{Result, WrapErr};
use treesim_alignment_rs::algo::Kind;
use treesim_alignment_rs::scoring::TreePath;
use treesim_core_rs::{Symbol, SymbolTable};
use treesim_io_rs::ScoreWriter;
use treesim_pairsim_rs::{Config, Engine};

#[derive(Parser, Debug)]
#[command(name = "pairsim")]
#[command(about = "Tree-path similarity of all pairs of symbol sequences from two sets", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory for the results, created if missing
    #[arg(long, value_name = "DIR", default_value = "./results")]
    results: PathBuf,

    /// Levels of the Euler tour, one integer per line
    #[arg(long, value_name = "FILE")]
    euler_levels: PathBuf,

    /// Positions of the symbols in the Euler tour: <symbol>,<index> per line
    #[arg(long, value_name = "FILE")]
    euler_positions: PathBuf,

    /// Lowest common ancestors computed offline: <a>,<b>,<lca> per line
    #[arg(long, value_name = "FILE")]
    lca: PathBuf,

    /// First set of sequences, comma separated symbols per line
    #[arg(long = "set-1", value_name = "FILE")]
    set_1: PathBuf,

    /// Second set of sequences, comma separated symbols per line
    #[arg(long = "set-2", value_name = "FILE")]
    set_2: PathBuf,

    /// Alignment algorithm: local (1) or global (2)
    #[arg(long, value_name = "ALG", default_value_t = Kind::Local)]
    alg: Kind,

    /// Compute just the alignment scores, no backtracking
    #[arg(long)]
    scores: bool,

    /// Penalty of a single gap
    #[arg(long, value_name = "FLOAT", default_value_t = Config::DEFAULT_GAP_PENALTY)]
    gap_penalty: f64,

    /// Number of threads: 0 = single thread, negative = all cores but |N| - 1
    #[arg(
        short = 't',
        long,
        value_name = "INT",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    threads: isize,

    /// Write the scores of each row chunk by chunk in the order of completion instead of the order
    /// of the second set
    #[arg(long)]
    unordered: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbosity: u8,
}

fn read<T>(
    path: &Path,
    what: &str,
    parse: impl FnOnce(Box<dyn BufRead + Send + Sync>) -> Result<T>,
) -> Result<T> {
    log::info!("Reading the {what} from {}", path.display());
    treesim_io_rs::open(path)
        .and_then(parse)
        .wrap_err_with(|| format!("Failed to read the {what} from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = Config::builder()
        .set_algorithm(cli.alg)
        .set_scores_only(cli.scores)
        .set_gap_penalty(cli.gap_penalty)
        .set_threads(cli.threads)
        .set_ordered(!cli.unordered)
        .build()?;

    // Everything is loaded and validated before the batch starts
    let mut symbols = SymbolTable::new();
    let levels = read(&cli.euler_levels, "Euler levels", treesim_io_rs::read_levels)?;
    let positions = read(&cli.euler_positions, "Euler positions", |r| {
        treesim_io_rs::read_positions(r, &mut symbols)
    })?;
    let lcas = read(&cli.lca, "LCAs", |r| treesim_io_rs::read_lcas(r, &mut symbols))?;
    let set1: Vec<Vec<Symbol>> = read(&cli.set_1, "first set", |r| {
        treesim_io_rs::read_sequences(r, &mut symbols)
    })?;
    let set2: Vec<Vec<Symbol>> = read(&cli.set_2, "second set", |r| {
        treesim_io_rs::read_sequences(r, &mut symbols)
    })?;
    log::info!("{} distinct symbols in total", symbols.len());

    let scheme = TreePath::new(*config.gap_penalty(), levels, positions, lcas)?;
    let mut writer = ScoreWriter::create(&cli.results)?;

    let mut engine = Engine::new(config);
    let summary = engine.run(&set1, &set2, &scheme, |_, scores| writer.write_scores(scores))?;
    writer.flush()?;

    log::info!(
        "Done: {} rows, {} scores written to {} in {:.2}s",
        summary.rows(),
        writer.written(),
        ScoreWriter::path(&cli.results).display(),
        summary.elapsed_s()
    );
    Ok(())
}
