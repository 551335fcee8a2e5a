use reelvault_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside
// containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    reelvault_api::setup::telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, prober, routes)
    let (_state, router) = reelvault_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    reelvault_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
