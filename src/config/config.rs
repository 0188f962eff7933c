use ::config::{ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::load().unwrap_or_else(|e| panic!("Failed to load configuration: {}", e))
});

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    pub quiz: QuizConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub domain: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoaderConfig {
    pub dataset_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuizConfig {
    pub history_limit: usize,
    pub generation_max: u8,
}

impl Config {
    fn load() -> Result<Self, ConfigError> {
        let raw = ::config::Config::builder()
            .set_default("storage.path", "quizdeck_state.json")?
            .set_default("generator.domain", "http://localhost:8787")?
            .set_default("quiz.history_limit", 20)?
            .set_default("quiz.generation_max", 10)?
            .add_source(Environment::with_prefix("QUIZDECK").separator("__"))
            .build()?;

        raw.try_deserialize()
    }
}
