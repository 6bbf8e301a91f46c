use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub dev_mode: bool,
    pub enable_file_log: bool,
    /// Path to a CSV file the demo binary bulk-imports on startup.
    pub import_sample_path: Option<String>,
    pub seed_count: usize,
}

impl Config {
    pub fn init() -> Result<Self> {
        let dev_mode = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = std::env::var("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        let import_sample_path = std::env::var("IMPORT_SAMPLE_PATH").ok();

        let seed_count = match std::env::var("SEED_COUNT") {
            Ok(raw) => raw
                .parse::<usize>()
                .context("SEED_COUNT must be a valid non-negative integer")?,
            Err(_) => 0,
        };

        Ok(Self {
            dev_mode,
            enable_file_log,
            import_sample_path,
            seed_count,
        })
    }
}
