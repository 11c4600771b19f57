//! Repositórios de acesso a dados

pub mod carro_repository;
pub mod memoria;
