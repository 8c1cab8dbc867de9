use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_format")]
    pub format: String,
    /// Fallback filter when `RUST_LOG` is unset, e.g. `info,service=debug`.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_format(), filter: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Records reserved up front for each new store space.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { initial_capacity: default_initial_capacity() }
    }
}

fn default_format() -> String { "compact".into() }
fn default_initial_capacity() -> usize { 16 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.logging.normalize()?;
        self.store.normalize();
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize(&mut self) -> Result<()> {
        self.format = self.format.trim().to_ascii_lowercase();
        if self.format.is_empty() {
            self.format = default_format();
        }
        if !matches!(self.format.as_str(), "compact" | "json") {
            return Err(anyhow!("logging.format must be `compact` or `json`, got `{}`", self.format));
        }
        if self.filter.as_deref().is_some_and(|f| f.trim().is_empty()) {
            self.filter = None;
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl StoreConfig {
    fn normalize(&mut self) {
        if self.initial_capacity == 0 {
            self.initial_capacity = default_initial_capacity();
        }
    }
}
