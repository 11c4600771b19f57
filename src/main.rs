use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::{error, info};

use carros_grpc::config::database::DatabaseConfig;
use carros_grpc::config::environment::EnvironmentConfig;
use carros_grpc::grpc::carros_service::CarrosGrpcServiceImpl;
use carros_grpc::grpc::proto::carros_grpc_service_server::CarrosGrpcServiceServer;
use carros_grpc::repositories::carro_repository::PgCarroRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Carros gRPC - Cadastro de carros");
    info!("===================================");

    // Inicializar banco de dados
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    // Rodar migrations (tabela carros com constraint de placa única)
    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository = Arc::new(PgCarroRepository::new(pool));
    let service = CarrosGrpcServiceImpl::new(repository);

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor gRPC iniciando em {}", addr);
    info!("🔍 RPCs disponíveis:");
    info!("   CarrosGrpcService/Adicionar - Cadastrar carro");

    Server::builder()
        .add_service(CarrosGrpcServiceServer::new(service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("🛑 Sinal de shutdown recebido");
}
