//! Emotions command
//!
//! Usage: zenith emotions [--json]

use clap::Args;
use zenith_core::ops::list_emotions;

#[derive(Debug, Args)]
pub struct EmotionsArgs {
    /// Print JSON instead of one line per emotion
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: EmotionsArgs) -> anyhow::Result<()> {
    let catalog = super::load_catalog()?;
    let emotions = list_emotions(&catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(emotions)?);
    } else {
        for emotion in emotions {
            println!("{} {:<12} {}", emotion.icon, emotion.id, emotion.display_name);
        }
    }
    Ok(())
}
