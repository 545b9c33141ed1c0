//! Periodic still-frame extraction.

use crate::ffmpeg::FfmpegCommand;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default seconds between extracted frames.
pub const DEFAULT_INTERVAL_SECS: u32 = 5;

/// Output filename pattern: `<output_dir>/screenshot_%04d.png`.
///
/// ffmpeg expands `%04d` to a sequence number starting at 0001.
pub fn output_pattern(output_dir: &Path) -> PathBuf {
    output_dir.join("screenshot_%04d.png")
}

fn build_command(source: &Path, pattern: &Path, interval_secs: u32) -> FfmpegCommand {
    FfmpegCommand::new()
        .input(source)
        .arg("-vf")
        .arg(format!("fps=1/{interval_secs}"))
        .output(pattern)
}

/// Extract one PNG frame every `interval_secs` seconds of `source`.
///
/// Frames land in `output_dir` as `screenshot_0001.png`,
/// `screenshot_0002.png`, ...; the count is determined by the source
/// duration. `interval_secs` must be at least 1.
pub fn extract(source: &Path, output_dir: &Path, interval_secs: u32) -> Result<()> {
    if interval_secs == 0 {
        return Err(Error::InvalidInput(
            "screenshot interval must be at least 1 second".to_string(),
        ));
    }
    if !source.is_file() {
        return Err(Error::file_not_found(source));
    }
    fs::create_dir_all(output_dir)?;

    let pattern = output_pattern(output_dir);
    info!(
        "Extracting a frame every {}s from {}",
        interval_secs,
        source.display()
    );

    build_command(source, &pattern, interval_secs).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_pattern() {
        let pattern = output_pattern(Path::new("/tmp/shots"));
        assert_eq!(pattern, Path::new("/tmp/shots/screenshot_%04d.png"));
    }

    #[test]
    fn test_fps_filter_from_interval() {
        let cmd = build_command(
            Path::new("/videos/clip.mkv"),
            Path::new("/tmp/shots/screenshot_%04d.png"),
            10,
        );

        let args: Vec<String> = cmd
            .as_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert!(args.contains(&"fps=1/10".to_string()));
        assert_eq!(args.last().unwrap(), "/tmp/shots/screenshot_%04d.png");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(Path::new("/videos/clip.mkv"), dir.path(), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_missing_source_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(Path::new("/no/such/clip.mkv"), dir.path(), 5).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
