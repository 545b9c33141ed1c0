//! Two-stage encode-then-remux pipeline.

use crate::{convert, remux, Result};
use std::path::{Path, PathBuf};

/// Re-encode `source` to H.265, then remux the encode's output to MKV.
///
/// Both stages write into `output_dir`. The remux input is exactly the path
/// the encode returned; when the encode fails its error propagates and the
/// remux is not attempted. Returns the final MKV path.
pub fn convert(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    let h265_output = convert::convert_to_h265(source, output_dir)?;
    remux::remux_to_mkv(&h265_output, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_stage_paths_chain() {
        // The remux consumes the encode's declared output path.
        let out_dir = Path::new("/tmp/out");
        let h265 = convert::h265_output_path(Path::new("/videos/clip.mov"), out_dir);
        assert_eq!(h265, Path::new("/tmp/out/clip_h265.mp4"));

        let mkv = remux::mkv_output_path(&h265, out_dir);
        assert_eq!(mkv, Path::new("/tmp/out/clip_h265.mkv"));
    }

    #[test]
    fn test_encode_failure_aborts_remux() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(Path::new("/no/such/clip.mov"), dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        // No stage output appears when stage one never ran.
        assert_eq!(fs_entries(dir.path()), 0);
    }

    fn fs_entries(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }
}
