//! Repositório de Carros
//!
//! Este módulo define o contrato de persistência consumido pelo controller
//! e a implementação PostgreSQL. A unicidade de placa é garantida em duas
//! camadas: a pré-checagem otimista do controller e a constraint UNIQUE do
//! schema, que é a autoridade final.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::models::carro::{Carro, NovoCarro};

/// Falhas do repositório
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Violação de constraint do schema: campos vazios ou placa duplicada
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Contrato de persistência de carros
#[async_trait]
pub trait CarroRepository: Send + Sync {
    async fn exists_by_placa(&self, placa: &str) -> Result<bool, RepositoryError>;

    /// Persiste o carro transiente e devolve a linha com o id gerado.
    ///
    /// Falha com `ConstraintViolation` quando modelo ou placa estão vazios,
    /// ou quando a unicidade de placa é violada na camada de storage.
    async fn save(&self, novo: NovoCarro) -> Result<Carro, RepositoryError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Usado apenas no setup dos testes
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}

/// Implementação PostgreSQL do repositório
pub struct PgCarroRepository {
    pool: PgPool,
}

impl PgCarroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarroRepository for PgCarroRepository {
    async fn exists_by_placa(&self, placa: &str) -> Result<bool, RepositoryError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM carros WHERE placa = $1)")
                .bind(placa)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn save(&self, novo: NovoCarro) -> Result<Carro, RepositoryError> {
        // Regras de schema (campos não vazios) valem nesta camada
        novo.validate()
            .map_err(|e| RepositoryError::ConstraintViolation(e.to_string()))?;

        let carro = sqlx::query_as::<_, Carro>(
            r#"
            INSERT INTO carros (id, modelo, placa, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&novo.modelo)
        .bind(&novo.placa)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() || db.is_check_violation() {
                    return RepositoryError::ConstraintViolation(db.message().to_string());
                }
            }
            RepositoryError::Database(e)
        })?;

        Ok(carro)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM carros WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM carros")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM carros").execute(&self.pool).await?;
        Ok(())
    }
}
