//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro da aplicação e sua conversão
//! para o status gRPC apropriado. Detalhes de storage ficam no log;
//! o cliente só recebe as descrições fixas do contrato.

use thiserror::Error;
use tonic::Status;
use tracing::error;

use crate::repositories::carro_repository::RepositoryError;

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            // O controller trata este caso antes; aqui é só a rede de proteção
            // para nunca vazar o detalhe da constraint ao cliente
            RepositoryError::ConstraintViolation(_) => {
                AppError::Validation("dados de entrada inválidos".to_string())
            }
            RepositoryError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<AppError> for Status {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Conflict(msg) => Status::already_exists(msg),
            AppError::Validation(msg) => Status::invalid_argument(msg),
            AppError::Database(e) => {
                error!("Database error: {}", e);
                Status::internal("erro interno do servidor")
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                Status::internal("erro interno do servidor")
            }
        }
    }
}
