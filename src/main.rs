use routes::*;

mod error;
mod routes;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let store = store::BoardStore::new("tasks.json");
    let router = make_routes(_AppState { store });

    tracing::info!("SERVER RUNNING AT PORT 5000");
    axum::Server::bind(&"[::]:5000".parse()?)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
