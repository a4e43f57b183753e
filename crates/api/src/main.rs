use std::sync::Arc;

use portstock_ai::AiService;
use portstock_data::MockDataStore;

#[tokio::main]
async fn main() {
    portstock_observability::init();

    let seed = std::env::var("PORTSTOCK_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);
    let addr = std::env::var("PORTSTOCK_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".to_string());

    let store = Arc::new(MockDataStore::generate(seed));
    tracing::info!(seed, "reference dataset ready");

    let service = Arc::new(AiService::new(store).expect("failed to build assistant service"));
    let app = portstock_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
