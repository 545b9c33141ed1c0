use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "h265_then_mkv")]
#[command(version, about = "Convert a video to H.265, then remux it to MKV")]
struct Cli {
    /// Path to the input video file
    video_path: PathBuf,

    /// Folder where the converted video will be saved
    output_folder: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "vidconv=info".to_string());
    tracing_subscriber::fmt().with_env_filter(&env_filter).init();

    let output = vidconv::pipeline::convert(&cli.video_path, &cli.output_folder)?;
    println!("Video remuxed and saved to: {}", output.display());

    Ok(())
}
