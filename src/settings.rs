//! Runtime settings for the terminal host, read from environment variables.
//!
//! | Variable     | Meaning                                       |
//! |--------------|-----------------------------------------------|
//! | `DINO_SEED`  | `u64` seed for a reproducible run             |
//! | `DINO_SHEET` | path of a sprite sheet to load instead of the built-in one |
//! | `DINO_MUTE`  | any value except `0`/`false` silences cues    |
//! | `DINO_LOG`   | file that receives log output                 |
//!
//! Settings are read before the logger exists, so problems with individual
//! values are handed back to the caller instead of being logged here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub sheet_path: Option<PathBuf>,
    pub muted: bool,
    pub log_file: Option<PathBuf>,
}

/// A value that was set but could not be used.  The setting falls back to
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsWarning {
    #[error("ignoring DINO_SEED={raw:?}: not an unsigned integer")]
    BadSeed { raw: String },
}

impl Settings {
    pub fn from_env() -> (Self, Vec<SettingsWarning>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, so parsing can be tested without
    /// touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<SettingsWarning>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut warnings = Vec::new();

        let seed = non_empty("DINO_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warnings.push(SettingsWarning::BadSeed { raw });
                None
            }
        });
        let muted = non_empty("DINO_MUTE")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false"))
            .unwrap_or(false);

        let settings = Settings {
            seed,
            sheet_path: non_empty("DINO_SHEET").map(PathBuf::from),
            muted,
            log_file: non_empty("DINO_LOG").map(PathBuf::from),
        };
        (settings, warnings)
    }
}
