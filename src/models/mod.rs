//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados que mapeiam exatamente
//! ao schema PostgreSQL.

pub mod carro;
