use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use diet_recipe::config::AppConfig;
use diet_recipe::providers::ProviderFactory;
use diet_recipe::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;

    let provider = ProviderFactory::get_default_provider(&config)?;
    info!("using provider '{}'", provider.provider_name());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!("diet-recipe-server listening on http://{addr}");

    server::serve(listener, Arc::from(provider)).await?;

    Ok(())
}
