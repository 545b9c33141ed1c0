//! Construction and execution of ffmpeg invocations.

use crate::{tools, Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// A single ffmpeg invocation.
///
/// The argument list is built once, is immutable after construction, and is
/// executed at most once ([`run`](Self::run) consumes the command). Every
/// command starts with `-y` so repeated runs overwrite their output instead
/// of prompting.
#[derive(Debug)]
pub struct FfmpegCommand {
    args: Vec<OsString>,
}

impl FfmpegCommand {
    pub fn new() -> Self {
        Self {
            args: vec![OsString::from("-y")],
        }
    }

    /// Append `-i <path>`.
    pub fn input(self, path: &Path) -> Self {
        self.arg("-i").arg(path)
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a sequence of arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append the output path. ffmpeg expects this as the final argument.
    pub fn output(self, path: &Path) -> Self {
        self.arg(path)
    }

    /// The full argument list, in invocation order.
    pub fn as_args(&self) -> &[OsString] {
        &self.args
    }

    /// Run ffmpeg to completion, blocking until the process exits.
    ///
    /// The executable is resolved on the search path up front so a missing
    /// install is reported distinctly from a failed run. stderr is captured
    /// and carried into the failure message on a non-zero exit.
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] when ffmpeg is not installed,
    /// [`Error::ToolFailed`] when it exits non-zero.
    pub fn run(self) -> Result<()> {
        let program = tools::require_tool(tools::FFMPEG)?;
        self.run_with_program(&program)
    }

    fn run_with_program(self, program: &Path) -> Result<()> {
        debug!("ffmpeg args: {:?}", self.args);

        // output() waits for the child on every return path, so the process
        // is always reaped.
        let result = Command::new(program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(tools::FFMPEG)
                } else {
                    Error::Io(e)
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::tool_failed(tools::FFMPEG, stderr.trim().to_string()));
        }

        Ok(())
    }
}

impl Default for FfmpegCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_order() {
        let cmd = FfmpegCommand::new()
            .input(Path::new("in.mov"))
            .args(["-c", "copy"])
            .output(Path::new("out.mkv"));

        let args: Vec<String> = cmd
            .as_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-y", "-i", "in.mov", "-c", "copy", "out.mkv"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_carries_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("fake_ffmpeg");
        std::fs::write(&tool, "#!/bin/sh\necho 'Unknown encoder' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = FfmpegCommand::new()
            .arg("-nope")
            .run_with_program(&tool)
            .unwrap_err();
        match err {
            Error::ToolFailed { message, .. } => assert!(message.contains("Unknown encoder")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
