#![allow(unused)]
use std::net::SocketAddr;

use grpc_health::{Health, HealthServer};
use once_cell::sync::OnceCell;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

/// install env_logger once for the whole test binary.
pub fn init_logger() {
    static LOGGER: OnceCell<()> = OnceCell::new();
    LOGGER.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// serve the health service on an ephemeral local port.
pub async fn serve<S: Health>(health: S) -> Result<SocketAddr, Box<dyn std::error::Error>> {
    init_logger();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = Server::builder()
            .add_service(HealthServer::new(health))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
        {
            log::error!("grpc test server stopped - {}", e);
        }
    });

    log::info!("grpc test server listening on {}", addr);

    Ok(addr)
}
