use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use crate::config::Config;
use crate::error::StartupError;
use crate::models::APP_NAME;
use crate::router;

pub async fn bind(config: &Config) -> Result<TcpListener, StartupError> {

    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let bound = listener
        .local_addr()
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(addr = %bound, "listener bound");

    Ok(listener)

}

fn announcement(addr: SocketAddr) -> String {

    format!("{} listening on http://localhost:{}", APP_NAME, addr.port())

}

/// Prints the single startup line to stdout and returns the bound address.
pub fn announce(listener: &TcpListener) -> Result<SocketAddr, StartupError> {

    let local_addr = listener.local_addr().map_err(StartupError::LocalAddr)?;
    println!("{}", announcement(local_addr));

    Ok(local_addr)

}

pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static
{

    axum::serve(listener, router::build())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");

    Ok(())

}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");

}
