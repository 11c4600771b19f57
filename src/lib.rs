//! Serviço gRPC de cadastro de carros.
//!
//! Expõe um único RPC (`CarrosGrpcService/Adicionar`) que registra um carro
//! (modelo + placa) no PostgreSQL, garantindo placa única e dados válidos.

pub mod config;
pub mod controllers;
pub mod grpc;
pub mod models;
pub mod repositories;
pub mod utils;
