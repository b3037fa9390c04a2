use std::sync::Arc;

#[tokio::main]
async fn main() {
    depot_observability::init();

    let services = Arc::new(build_services().await);
    let app = depot_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

#[cfg(not(feature = "postgres"))]
async fn build_services() -> depot_api::app::AppServices {
    tracing::warn!("running with in-memory persistence; data is lost on restart");
    depot_api::app::build_in_memory_services()
}

#[cfg(feature = "postgres")]
async fn build_services() -> depot_api::app::AppServices {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::PgPool::connect(&url)
        .await
        .expect("failed to connect to postgres");
    depot_api::app::build_postgres_services(pool)
}
