use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vidconv::screenshots;

#[derive(Parser)]
#[command(name = "extract_screenshots")]
#[command(version, about = "Extract screenshots from a video every few seconds")]
struct Cli {
    /// Path to the input video file
    video_path: PathBuf,

    /// Folder where screenshots will be saved
    output_folder: PathBuf,

    /// Interval in seconds between screenshots
    #[arg(
        long,
        default_value_t = screenshots::DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    interval: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "vidconv=info".to_string());
    tracing_subscriber::fmt().with_env_filter(&env_filter).init();

    screenshots::extract(&cli.video_path, &cli.output_folder, cli.interval)?;
    println!("Screenshots saved to: {}", cli.output_folder.display());

    Ok(())
}
