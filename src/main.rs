use std::net::SocketAddr;
use std::sync::Arc;
use user_search::server::{router, ServerConfig};
use user_search::store::loader::{JsonFileStore, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;
    let mut dataset = "dataset.json".to_string();
    let mut token =
        std::env::var("ACCESS_TOKEN").unwrap_or_else(|_| "Good access token".to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--dataset" => {
                dataset = args[i + 1].clone();
                i += 2;
            }
            "--token" => {
                token = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting search server on {}", bind_addr);
    tracing::info!("Dataset: {}", dataset);

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(dataset));
    let config = Arc::new(ServerConfig::new(token));

    let app = router(store, config);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
