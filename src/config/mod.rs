//! Configuração do projeto
//!
//! Este módulo contém a configuração de banco de dados e as variáveis
//! de ambiente do serviço.

pub mod database;
pub mod environment;
