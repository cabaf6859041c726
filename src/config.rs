use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub token_expires_in_mins: u32,
    pub products: ProductsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://dummyjson.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_expires_in_mins: 30,
            products: ProductsConfig::default(),
        }
    }
}

/// Orden del listado remoto de productos (`/products?sortBy=..&order=..`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsConfig {
    pub sort_by: String,
    pub order: String,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            sort_by: "title".to_string(),
            order: "asc".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            token_expires_in_mins: option_env!("TOKEN_EXPIRES_IN_MINS")
                .unwrap_or("30").parse().unwrap_or(30),
            products: ProductsConfig {
                sort_by: option_env!("PRODUCTS_SORT_BY")
                    .unwrap_or("title").to_string(),
                order: option_env!("PRODUCTS_ORDER")
                    .unwrap_or("asc").to_string(),
            },
        }
    }

    /// URL base de la API remota
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
