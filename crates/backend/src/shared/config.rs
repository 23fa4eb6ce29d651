use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Fixed sampling parameters for the inference call.
#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: i32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
url = "sqlite://target/db/sinercia.db?mode=rwc"

[llm]
model = "gpt-4o-mini"
temperature = 0.7
max_tokens = 500
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Database connection string; the DATABASE_URL environment variable wins
/// over the config file.
pub fn database_url(config: &Config) -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| config.database.url.clone())
}

/// OpenAI API key. Comes only from the environment, never from config.toml.
pub fn openai_api_key() -> anyhow::Result<String> {
    std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 500);
        assert!((config.llm.temperature - 0.7).abs() < f64::EPSILON);
    }
}
