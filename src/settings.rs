//! Persistence of the last-used inputs.
//!
//! The tool remembers the previous host, port, command, and result (and the
//! password, only when the user opted in) in a small JSON blob in the user's
//! cache directory. Persistence is strictly best-effort: a missing, corrupt,
//! or unwritable cache file is logged and otherwise ignored, never fatal.
//!
//! Writes go through a temp file in the same directory followed by a rename,
//! so a crash mid-write cannot leave a half-written blob behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// The cached field values, mirroring the user-facing inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last host entered.
    #[serde(default)]
    pub host: String,
    /// Last port entered, kept as the raw string the user typed.
    #[serde(default)]
    pub port: String,
    /// Last command entered.
    #[serde(default)]
    pub command: String,
    /// Last result shown.
    #[serde(default)]
    pub result: String,
    /// Whether the user opted in to password caching.
    #[serde(default)]
    pub savepw: bool,
    /// Cached password; present only when `savepw` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
}

/// Default cache file location: `<cache dir>/rconsole.json`.
///
/// Returns `None` when the platform cache directory cannot be determined,
/// in which case persistence is skipped.
pub fn default_cache_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("rconsole.json"))
}

/// Load cached settings from `path`.
///
/// Missing, unreadable, or corrupt files are logged and yield `None`.
pub fn load(path: &Path) -> Option<Settings> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "cache file not found");
            return None;
        }
        Err(err) => {
            error!(path = %path.display(), %err, "cannot read cache file");
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(settings) => Some(settings),
        Err(err) => {
            error!(path = %path.display(), %err, "cache file contains garbage");
            None
        }
    }
}

/// Save settings to `path`, atomically. Failure is logged, not returned.
///
/// The password is stripped unless `savepw` is set, regardless of what the
/// caller left in the struct.
pub fn save(path: &Path, settings: &Settings) {
    let mut to_write = settings.clone();
    if !to_write.savepw {
        to_write.passwd = None;
    }

    if let Err(err) = write_atomic(path, &to_write) {
        error!(path = %path.display(), %err, "cannot write cache file");
    }
}

fn write_atomic(path: &Path, settings: &Settings) -> std::io::Result<()> {
    let json = serde_json::to_string(settings)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
