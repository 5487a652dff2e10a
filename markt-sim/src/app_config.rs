use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// First simulated date (`dd.MM.yyyy`); today when unset.
    pub start_date: Option<String>,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

fn default_days() -> u32 {
    120
}

fn default_csv_path() -> String {
    "products.csv".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MARKT__SIMULATION__DAYS=30` overrides the file value.
            .add_source(config::Environment::with_prefix("MARKT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
