//! Superfície gRPC do serviço

pub mod carros_service;

/// Tipos e definições de serviço gerados a partir de proto/carros.proto
pub mod proto {
    tonic::include_proto!("carros");
}
