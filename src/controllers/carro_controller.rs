//! Controller de cadastro de carros
//!
//! Procedimento de decisão do endpoint: pré-checagem de placa, construção
//! do carro transiente e persistência, com cada violação de regra mapeada
//! para um erro distinto.

use std::sync::Arc;
use tracing::{info, warn};

use crate::models::carro::{Carro, NovoCarro};
use crate::repositories::carro_repository::{CarroRepository, RepositoryError};
use crate::utils::errors::AppError;

pub struct CarroController {
    repository: Arc<dyn CarroRepository>,
}

impl CarroController {
    pub fn new(repository: Arc<dyn CarroRepository>) -> Self {
        Self { repository }
    }

    /// Registra um novo carro.
    ///
    /// A pré-checagem de placa é otimista: duas requisições concorrentes
    /// podem passar por ela e disputar o INSERT. Quem perde recebe a
    /// violação de constraint da camada de persistência, que é a autoridade
    /// final sobre a unicidade.
    pub async fn adicionar(&self, modelo: String, placa: String) -> Result<Carro, AppError> {
        if self.repository.exists_by_placa(&placa).await? {
            return Err(AppError::Conflict("carro com placa existente".to_string()));
        }

        let novo = NovoCarro::new(modelo, placa);

        match self.repository.save(novo).await {
            Ok(carro) => {
                info!("🚗 Carro cadastrado: id={} placa={}", carro.id, carro.placa);
                Ok(carro)
            }
            Err(RepositoryError::ConstraintViolation(detail)) => {
                // O detalhe fica no log; o cliente recebe a descrição fixa
                warn!("Cadastro rejeitado pela camada de persistência: {}", detail);
                Err(AppError::Validation("dados de entrada inválidos".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
