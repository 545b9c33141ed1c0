//! External tool detection.

use crate::{Error, Result};
use std::path::PathBuf;

/// Name of the media tool every operation in this crate shells out to.
pub const FFMPEG: &str = "ffmpeg";

/// Require that a tool is available, returning its resolved path.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the tool is not on the search path.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_tool_not_found() {
        let err = require_tool("nonexistent_tool_12345").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
