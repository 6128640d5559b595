//! Quote commands
//!
//! Usage:
//!   zenith quotes [EMOTION] [--json]
//!   zenith random <EMOTION> [--exclude <ID>]... [--json]

use std::collections::HashSet;

use clap::Args;
use zenith_core::ops::list_quotes_for_emotion;
use zenith_core::{pick_random, ExError, Quote};

#[derive(Debug, Args)]
pub struct QuotesArgs {
    /// Emotion key; all quotes are listed when omitted
    pub emotion: Option<String>,

    /// Print JSON instead of one line per quote
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RandomArgs {
    /// Emotion key
    pub emotion: String,

    /// Quote id to skip (repeatable)
    #[arg(long = "exclude", value_name = "ID")]
    pub exclude: Vec<String>,

    /// Print JSON instead of a single line
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: QuotesArgs) -> anyhow::Result<()> {
    let catalog = super::load_catalog()?;

    let quotes: Vec<&Quote> = match &args.emotion {
        Some(emotion) => list_quotes_for_emotion(&catalog, emotion).map_err(ExError::from)?,
        None => catalog.list_quotes().iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quotes)?);
    } else {
        for quote in quotes {
            print_quote(quote);
        }
    }
    Ok(())
}

pub fn execute_random(args: RandomArgs) -> anyhow::Result<()> {
    let catalog = super::load_catalog()?;
    let exclude: HashSet<String> = args.exclude.into_iter().collect();

    let quote = pick_random(&catalog, &args.emotion, &exclude, &mut rand::thread_rng())
        .map_err(ExError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(quote)?);
    } else {
        print_quote(quote);
    }
    Ok(())
}

fn print_quote(quote: &Quote) {
    println!("[{}] {}: \"{}\" - {}", quote.emotion, quote.id, quote.text, quote.author);
}
