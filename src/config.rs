use std::path::PathBuf;

use log::LevelFilter;

pub const DEFAULT_INPUT_PATH: &str = "UnicodeData.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "../unicode_data.h";
pub const LOG_ENV_VAR: &str = "UNICODE_DATA_TABLES_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: LevelFilter,
    /// Reject records whose code-point fields are not 4-6 hex digits.
    pub strict_hex: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_level: LevelFilter::Info,
            strict_hex: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::default().with_log_level(std::env::var(LOG_ENV_VAR).ok().as_deref())
    }

    fn with_log_level(mut self, value: Option<&str>) -> Self {
        if let Some(level) = value.and_then(|name| name.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }
}
