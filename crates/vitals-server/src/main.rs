use tracing_subscriber::EnvFilter;

use vitals_server::config::ListenConfig;
use vitals_server::router::create_router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ListenConfig::from_env().expect("Invalid listen configuration");
    let addr = config.socket_addr().expect("Invalid listen address");

    let app = create_router();

    tracing::info!("Vitals server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
