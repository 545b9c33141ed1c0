//! # vidconv
//!
//! Thin command-line front-ends around the external `ffmpeg` binary:
//!
//! - `convert_to_h265` — re-encode a video to H.265/HEVC in an MP4 container
//! - `h265_then_mkv` — H.265 encode followed by an MKV stream-copy remux
//! - `extract_screenshots` — extract one PNG frame every N seconds
//!
//! All decoding, encoding and muxing is delegated to `ffmpeg`, located via
//! the process search path. This crate builds the argument list, runs the
//! tool synchronously, and reports one of two failures: the tool exited
//! non-zero, or the tool is not installed.
//!
//! ## Example
//!
//! ```no_run
//! let output = vidconv::convert::convert_to_h265(
//!     "clip.mov".as_ref(),
//!     "/tmp/out".as_ref(),
//! )?;
//! println!("Encoded to {}", output.display());
//! # Ok::<(), vidconv::Error>(())
//! ```

mod error;

pub mod convert;
pub mod ffmpeg;
pub mod pipeline;
pub mod remux;
pub mod screenshots;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use ffmpeg::FfmpegCommand;
pub use tools::require_tool;
