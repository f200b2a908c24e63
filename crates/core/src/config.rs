use crate::model::Language;
use serde::{Deserialize, Serialize};

fn default_schema_version() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            language: Language::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::model::Language;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: AppConfig = toml::from_str("language = \"english\"").expect("valid toml");
        assert_eq!(cfg.language, Language::English);
        assert_eq!(cfg.schema_version, 1);
        assert_eq!(cfg.log_level, "info");
    }
}
