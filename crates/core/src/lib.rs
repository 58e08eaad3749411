pub mod config;

pub use config::{load_dotenv, Config, RulesConfig, ServerConfig, RULES_FILENAME, RULES_PATH_ENV};
