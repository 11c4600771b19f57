//! Testes do endpoint de cadastro de carros
//!
//! Exercita o serviço gRPC diretamente sobre o repositório em memória,
//! que reproduz a semântica de constraints do schema PostgreSQL.

use std::sync::Arc;
use tonic::{Code, Request};
use uuid::Uuid;

use carros_grpc::grpc::carros_service::CarrosGrpcServiceImpl;
use carros_grpc::grpc::proto::carros_grpc_service_server::CarrosGrpcService;
use carros_grpc::grpc::proto::CarroRequest;
use carros_grpc::models::carro::NovoCarro;
use carros_grpc::repositories::carro_repository::CarroRepository;
use carros_grpc::repositories::memoria::CarroRepositoryEmMemoria;

fn setup() -> (Arc<CarroRepositoryEmMemoria>, CarrosGrpcServiceImpl) {
    let repository = Arc::new(CarroRepositoryEmMemoria::new());
    let service = CarrosGrpcServiceImpl::new(repository.clone());
    (repository, service)
}

fn carro_request(modelo: &str, placa: &str) -> Request<CarroRequest> {
    Request::new(CarroRequest {
        modelo: modelo.to_string(),
        placa: placa.to_string(),
    })
}

#[tokio::test]
async fn deve_adicionar_um_novo_carro() {
    let (repository, service) = setup();

    let response = service
        .adicionar(carro_request("Golf", "ABC-9999"))
        .await
        .expect("cadastro deveria ter sucesso")
        .into_inner();

    let id = Uuid::parse_str(&response.id).expect("id deveria ser um UUID válido");
    assert!(repository.exists_by_id(id).await.unwrap());
}

#[tokio::test]
async fn nao_deve_adicionar_carro_quando_placa_ja_existente() {
    let (repository, service) = setup();
    let existente = repository
        .save(NovoCarro::new("Palio", "OIP-9876"))
        .await
        .unwrap();

    let error = service
        .adicionar(carro_request("Ferrari", &existente.placa))
        .await
        .expect_err("placa duplicada deveria falhar");

    assert_eq!(error.code(), Code::AlreadyExists);
    assert_eq!(error.message(), "carro com placa existente");
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn nao_deve_adicionar_carro_quando_dados_de_entrada_forem_invalidos() {
    let (repository, service) = setup();

    let error = service
        .adicionar(carro_request("", ""))
        .await
        .expect_err("dados vazios deveriam falhar");

    assert_eq!(error.code(), Code::InvalidArgument);
    assert_eq!(error.message(), "dados de entrada inválidos");
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn rejeicao_repetida_nao_altera_o_estado() {
    let (repository, service) = setup();
    repository
        .save(NovoCarro::new("Palio", "OIP-9876"))
        .await
        .unwrap();

    for _ in 0..3 {
        let error = service
            .adicionar(carro_request("Ferrari", "OIP-9876"))
            .await
            .expect_err("placa duplicada deveria falhar");

        assert_eq!(error.code(), Code::AlreadyExists);
        assert_eq!(error.message(), "carro com placa existente");
    }

    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn falha_nao_deixa_estado_parcial() {
    let (repository, service) = setup();
    repository
        .save(NovoCarro::new("Palio", "OIP-9876"))
        .await
        .unwrap();
    let antes = repository.count().await.unwrap();

    let _ = service
        .adicionar(carro_request("Ferrari", "OIP-9876"))
        .await
        .expect_err("placa duplicada deveria falhar");
    let _ = service
        .adicionar(carro_request("", ""))
        .await
        .expect_err("dados vazios deveriam falhar");

    assert_eq!(repository.count().await.unwrap(), antes);
}

#[tokio::test]
async fn cadastros_concorrentes_com_mesma_placa_tem_um_unico_vencedor() {
    let (repository, service) = setup();

    let (a, b) = tokio::join!(
        service.adicionar(carro_request("Uno", "XYZ-0001")),
        service.adicionar(carro_request("Gol", "XYZ-0001")),
    );

    let sucessos = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(sucessos, 1, "exatamente um cadastro deve vencer");

    let erro = if a.is_err() {
        a.unwrap_err()
    } else {
        b.unwrap_err()
    };
    assert!(
        matches!(erro.code(), Code::AlreadyExists | Code::InvalidArgument),
        "o perdedor deve receber um erro de cliente, veio {:?}",
        erro.code()
    );
    assert_eq!(repository.count().await.unwrap(), 1);
}
