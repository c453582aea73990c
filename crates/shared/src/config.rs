//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Remote expense-ledger configuration.
    pub ledger: LedgerConfig,
    /// Receipt extraction model configuration.
    #[serde(default)]
    pub extractor: ExtractorConfig,
    /// Transient receipt storage configuration.
    #[serde(default)]
    pub receipts: ReceiptConfig,
}

/// Remote expense-ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the remote ledger API.
    pub base_url: String,
    /// API key for the remote ledger.
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_ledger_timeout")]
    pub timeout_secs: u64,
}

fn default_ledger_timeout() -> u64 {
    30
}

/// Receipt extraction model configuration.
///
/// This struct is the cache key for extractor client instances, so it is
/// hashable and comparable. Temperature is a `Decimal` rather than a float
/// to keep the key exact (and the workspace float-free).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ExtractorConfig {
    /// Vision model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature (0 to 1).
    #[serde(default = "default_temperature")]
    pub temperature: Decimal,
    /// Maximum tokens to generate, if capped.
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds.
    #[serde(default = "default_extractor_timeout")]
    pub timeout_secs: u64,
    /// Maximum number of retries on failure.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> Decimal {
    Decimal::ZERO
}

fn default_extractor_timeout() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    2
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
            timeout_secs: default_extractor_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

/// Transient receipt storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptConfig {
    /// Directory where uploaded receipt images are staged.
    #[serde(default = "default_receipt_dir")]
    pub dir: String,
}

fn default_receipt_dir() -> String {
    "img".to_string()
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            dir: default_receipt_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// A `.env` file is loaded first if present, then `config/default`,
    /// then `config/{RUN_MODE}`, then `TABSPLIT__`-prefixed environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TABSPLIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
