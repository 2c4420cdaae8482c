use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (ver build.rs).
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://127.0.0.1:8000")
                .to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.moonbar.app")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_url_is_default() {
        let config = AppConfig::from_env();
        assert_eq!(config.backend_url(), config.backend_url_development);
    }

    #[test]
    fn production_environment_switches_url() {
        let mut config = AppConfig::from_env();
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production);
    }
}
