use crate::app_config::AppConfig;
use crate::kafka_api::{proto, KafkaService};
use anyhow::Context;
use std::net::SocketAddr;
use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run_until_stopped(config: AppConfig) -> Result<(), anyhow::Error> {
    let address: SocketAddr = config
        .address()
        .parse()
        .context("While parsing socket address")?;
    info!("Listening {address}");
    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(proto::FILE_DESCRIPTOR_SET)
        .build_v1alpha()
        .context("While building reflection service")?;

    Server::builder()
        .layer(TraceLayer::new_for_grpc())
        .add_service(reflection_service)
        .add_service(proto::KafkaServiceServer::new(KafkaService))
        .serve(address)
        .await
        .context("While serving port")?;

    Ok(())
}
