use std::sync::Arc;

#[tokio::main]
async fn main() {
    larder_observability::init();

    let services = Arc::new(larder_api::app::services::build_services());
    let app = larder_api::app::build_app(services);

    let addr = std::env::var("LARDER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
