//! Pipeline configuration management.
//!
//! Provides configuration loading, the global verbose flag, and the
//! configuration handle exposed to callers.

mod defaults;

pub use defaults::PipelineDefaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, stage traces go to stderr.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["lumafuse.yml", "lumafuse.yaml"];

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    pub defaults: PipelineDefaults,
}

/// Loaded configuration plus its provenance and any sanitization warnings.
pub struct PipelineConfigHandle {
    pub config: PipelineConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Falls back to built-in defaults when no candidate file exists. A file
/// that fails to parse is reported as a warning, not an error; the built-in
/// defaults are used instead.
pub fn load_pipeline_config(custom_path: Option<&Path>) -> PipelineConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }
        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<PipelineConfig>(&contents) {
                Ok(mut config) => {
                    warnings.extend(config.defaults.sanitize());
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    verbose_println!("[lumafuse] Loaded pipeline config from {}", source.display());
                    return PipelineConfigHandle {
                        config,
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => {
                    warnings.push(format!("{}: {}", candidate.display(), err));
                }
            },
            Err(err) => {
                warnings.push(format!("{}: {}", candidate.display(), err));
            }
        }
    }

    verbose_println!("[lumafuse] Using built-in pipeline defaults");
    PipelineConfigHandle {
        config: PipelineConfig::default(),
        source: None,
        warnings,
    }
}

fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }
    for name in CONFIG_FILENAMES {
        candidates.push(PathBuf::from(name));
    }
    candidates
}

/// Process-wide configuration handle, loaded once on first use.
pub fn pipeline_config_handle() -> &'static PipelineConfigHandle {
    static HANDLE: OnceLock<PipelineConfigHandle> = OnceLock::new();
    HANDLE.get_or_init(|| load_pipeline_config(None))
}
