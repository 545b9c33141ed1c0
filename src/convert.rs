//! H.265 re-encode operation.

use crate::ffmpeg::FfmpegCommand;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// H.265 encoder settings.
#[derive(Debug, Clone)]
pub struct EncodeSettings {
    /// Constant rate factor; lower means higher quality and larger output.
    pub crf: u32,
    /// Encoding speed vs. compression tradeoff.
    pub preset: String,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            crf: 28,
            preset: "medium".to_string(),
        }
    }
}

/// Output path for an H.265 encode: `<output_dir>/<stem>_h265.mp4`.
///
/// Pure function of its inputs; repeated runs land on the same path.
pub fn h265_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{stem}_h265.mp4"))
}

fn build_command(source: &Path, output: &Path, settings: &EncodeSettings) -> FfmpegCommand {
    FfmpegCommand::new()
        .input(source)
        .args(["-c:v", "libx265"])
        .arg("-crf")
        .arg(settings.crf.to_string())
        .arg("-preset")
        .arg(settings.preset.as_str())
        .output(output)
}

/// Re-encode `source` to H.265/MP4 inside `output_dir` with default settings.
///
/// Creates `output_dir` recursively if absent. Returns the output path on
/// success.
pub fn convert_to_h265(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    convert_with_settings(source, output_dir, &EncodeSettings::default())
}

/// Re-encode `source` to H.265/MP4 with explicit encoder settings.
pub fn convert_with_settings(
    source: &Path,
    output_dir: &Path,
    settings: &EncodeSettings,
) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(Error::file_not_found(source));
    }
    fs::create_dir_all(output_dir)?;

    let output = h265_output_path(source, output_dir);
    info!(
        "Encoding {} to H.265 (crf {}, preset {})",
        source.display(),
        settings.crf,
        settings.preset
    );

    build_command(source, &output, settings).run()?;
    Ok(output)
}
