mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod router;
mod server;

use config::Config;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {

    logger::init();

    let config = Config::from_env()?;

    // bind failure is fatal, main exits non-zero with the error
    let listener = server::bind(&config).await?;
    server::announce(&listener)?;

    server::serve(listener, server::shutdown_signal()).await

}
