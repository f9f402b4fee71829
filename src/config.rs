use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Public TheMealDB endpoint using the free test key `1`.
pub const BASE_URL: &str = "https://themealdb.com/api/json/v1/1/";

/// Settings for building a [`MealDbClient`](crate::MealDbClient)
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL that endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; the HTTP library default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("mealdb/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__BASE_URL, MEALDB__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ClientConfig::load`] for the lookup order.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
