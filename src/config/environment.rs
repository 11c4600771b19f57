//! Configuração de variáveis de ambiente

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "50051".to_string())
                .parse()
                .expect("PORT must be a valid number"),
        }
    }
}

impl EnvironmentConfig {
    /// Endereço de bind do servidor gRPC
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
