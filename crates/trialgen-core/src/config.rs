//! Configuration types for trialgen.
//!
//! [`Config::load`] layers an optional user TOML file over the embedded
//! defaults. [`Config::defaults`] returns the same defaults without touching
//! the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
input  = "../src/data/words_real.ts"
output = "../src/data/testData.ts"

[emit]
header_comment = "正式测试数据 (Test Questions)"
type_name      = "TrialItem"
type_module    = "@/types"
count_unit     = "题"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub emit: EmitConfig,
}

/// `[paths]` section. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf { PathBuf::from("../src/data/words_real.ts") }
fn default_output() -> PathBuf { PathBuf::from("../src/data/testData.ts") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// `[emit]` section: the fixed text around the generated constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitConfig {
    #[serde(default = "default_header_comment")]
    pub header_comment: String,
    #[serde(default = "default_type_name")]
    pub type_name: String,
    #[serde(default = "default_type_module")]
    pub type_module: String,
    #[serde(default = "default_count_unit")]
    pub count_unit: String,
}

fn default_header_comment() -> String { "正式测试数据 (Test Questions)".to_string() }
fn default_type_name() -> String { "TrialItem".to_string() }
fn default_type_module() -> String { "@/types".to_string() }
fn default_count_unit() -> String { "题".to_string() }

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            header_comment: default_header_comment(),
            type_name: default_type_name(),
            type_module: default_type_module(),
            count_unit: default_count_unit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, layering `path` on top when given. A path
    /// that was asked for explicitly must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "layering user config");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|_| Self {
                paths: PathsConfig::default(),
                emit: EmitConfig::default(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
