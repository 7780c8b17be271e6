use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// How often live feeds re-sample the clock, in milliseconds.
    pub refresh_interval_ms: u64,
    /// Pin the palette to a fixed hour instead of following the wall clock.
    /// Used for previewing a specific time of day.
    pub fixed_hour: Option<f32>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 10_000,
            fixed_hour: None,
        }
    }
}

impl SkyConfig {
    pub fn load() -> Self {
        let path = std::path::Path::new("config.json");
        if !path.exists() {
            log::info!("no config.json found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded config.json");
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config.json: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config.json: {e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms)
    }
}
