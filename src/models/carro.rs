//! Modelo de Carro
//!
//! Este módulo contém o struct Carro persistido e a variante transiente
//! usada no cadastro. Mapeia exatamente a tabela `carros` do schema.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Carro persistido - mapeia exatamente a tabela carros
#[derive(Debug, Clone, FromRow)]
pub struct Carro {
    pub id: Uuid,
    pub modelo: String,
    pub placa: String,
    pub created_at: DateTime<Utc>,
}

/// Carro transiente, ainda sem id, construído a partir do request.
///
/// As regras de não-vazio pertencem ao schema da camada de persistência;
/// `save` roda esta validação antes do INSERT.
#[derive(Debug, Clone, Validate)]
pub struct NovoCarro {
    #[validate(length(min = 1))]
    pub modelo: String,

    #[validate(length(min = 1))]
    pub placa: String,
}

impl NovoCarro {
    pub fn new(modelo: impl Into<String>, placa: impl Into<String>) -> Self {
        Self {
            modelo: modelo.into(),
            placa: placa.into(),
        }
    }
}
