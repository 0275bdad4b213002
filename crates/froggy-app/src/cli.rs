use clap::Parser;

/// Froggy — a desktop frog companion with reminders, facts, and a local LLM.
#[derive(Parser, Debug)]
#[command(name = "froggy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "froggy=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
