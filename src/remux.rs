//! Container remux to MKV via stream copy.

use crate::ffmpeg::FfmpegCommand;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path for an MKV remux: `<output_dir>/<stem>.mkv`.
pub fn mkv_output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_dir.join(format!("{stem}.mkv"))
}

fn build_command(source: &Path, output: &Path) -> FfmpegCommand {
    FfmpegCommand::new()
        .input(source)
        .args(["-c:v", "copy", "-c:a", "copy"])
        .output(output)
}

/// Repackage `source` into an MKV container without re-encoding.
///
/// Both video and audio streams are stream-copied. Creates `output_dir`
/// recursively if absent; returns the MKV path on success.
pub fn remux_to_mkv(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(Error::file_not_found(source));
    }
    fs::create_dir_all(output_dir)?;

    let output = mkv_output_path(source, output_dir);
    info!("Remuxing {} to {}", source.display(), output.display());

    build_command(source, &output).run()?;
    Ok(output)
}
