//! Repositório em memória
//!
//! Implementação fake do contrato de persistência, com a mesma semântica
//! de constraints do schema PostgreSQL. Usada pelos testes do endpoint no
//! lugar de um banco real.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::models::carro::{Carro, NovoCarro};
use crate::repositories::carro_repository::{CarroRepository, RepositoryError};

/// Repositório de carros em memória
#[derive(Default)]
pub struct CarroRepositoryEmMemoria {
    carros: RwLock<Vec<Carro>>,
}

impl CarroRepositoryEmMemoria {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarroRepository for CarroRepositoryEmMemoria {
    async fn exists_by_placa(&self, placa: &str) -> Result<bool, RepositoryError> {
        let carros = self.carros.read().await;
        Ok(carros.iter().any(|c| c.placa == placa))
    }

    async fn save(&self, novo: NovoCarro) -> Result<Carro, RepositoryError> {
        novo.validate()
            .map_err(|e| RepositoryError::ConstraintViolation(e.to_string()))?;

        // Unicidade checada dentro do write lock, como a constraint do schema
        let mut carros = self.carros.write().await;
        if carros.iter().any(|c| c.placa == novo.placa) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "placa duplicada: {}",
                novo.placa
            )));
        }

        let carro = Carro {
            id: Uuid::new_v4(),
            modelo: novo.modelo,
            placa: novo.placa,
            created_at: Utc::now(),
        };
        carros.push(carro.clone());

        Ok(carro)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let carros = self.carros.read().await;
        Ok(carros.iter().any(|c| c.id == id))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let carros = self.carros.read().await;
        Ok(carros.len() as i64)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut carros = self.carros.write().await;
        carros.clear();
        Ok(())
    }
}
