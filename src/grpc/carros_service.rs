//! Serviço gRPC de carros
//!
//! Implementa o CarrosGrpcService definido em proto/carros.proto,
//! delegando a decisão ao controller e traduzindo cada falha no
//! tonic::Status correspondente.

use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::controllers::carro_controller::CarroController;
use crate::grpc::proto::carros_grpc_service_server::CarrosGrpcService;
use crate::grpc::proto::{CarroRequest, CarroResponse};
use crate::repositories::carro_repository::CarroRepository;

pub struct CarrosGrpcServiceImpl {
    controller: CarroController,
}

impl CarrosGrpcServiceImpl {
    pub fn new(repository: Arc<dyn CarroRepository>) -> Self {
        Self {
            controller: CarroController::new(repository),
        }
    }
}

#[tonic::async_trait]
impl CarrosGrpcService for CarrosGrpcServiceImpl {
    async fn adicionar(
        &self,
        request: Request<CarroRequest>,
    ) -> Result<Response<CarroResponse>, Status> {
        let CarroRequest { modelo, placa } = request.into_inner();

        let carro = self.controller.adicionar(modelo, placa).await?;

        Ok(Response::new(CarroResponse {
            id: carro.id.to_string(),
        }))
    }
}
