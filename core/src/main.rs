mod args;

use args::Args;
use chess::Board;
use clap::Parser;
use evaluation::{Evaluator, HeuristicEvaluator, ValuationCache};
use log::{debug, LevelFilter};
use model::ModelEvaluator;
use search::MoveSelector;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let board = match &args.fen {
        Some(fen) => Board::from_str(fen).map_err(|e| e.to_string())?,
        None => Board::default(),
    };

    let evaluator = create_evaluator(&args)?;
    debug!(
        "using {} evaluation at depth {}",
        evaluator.name(),
        args.depth
    );

    let mut selector = MoveSelector::new(evaluator);
    let (best_move, value) = selector.select(&board, args.depth)?;

    println!("bestmove {} ({:+.3})", best_move, value);

    Ok(())
}

fn create_evaluator(args: &Args) -> Result<Box<dyn Evaluator>, Box<dyn Error>> {
    if let Some(model_path) = &args.model {
        return Ok(Box::new(ModelEvaluator::from_file(model_path)?));
    }

    let cache = ValuationCache::load(&args.cache)?;
    Ok(Box::new(HeuristicEvaluator::new(cache)))
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?,
        None => TermLogger::init(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }

    Ok(args)
}
