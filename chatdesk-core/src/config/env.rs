//! Environment loading from `.env` files.
//!
//! Values already present in the process environment win over the file, so
//! `CHATDESK_*` variables exported in the shell are never clobbered.

use anyhow::Result;

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is fine. A file that exists but cannot be parsed is logged
/// and otherwise ignored.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment variables");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!("failed to load .env file: {e}");
            Ok(())
        }
    }
}
