use tracing::info;

use alumnet::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    startup::{connect_to_database, init_tracing},
    util::shutdown::shutdown_signal,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let db = connect_to_database(&config).await?;
    let state = AppState::new(db, &config);

    let routes = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    Ok(())
}
