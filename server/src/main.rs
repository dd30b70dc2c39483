//! gridpath-server entrypoint.
//!
//! Serves the grid API at `http://<host>:<port>/api/...` until interrupted.

use std::error::Error;

use gridpath_server::config::{ConfigError, usage};
use gridpath_server::{GridService, parse_options, router};
use log::{error, info};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("cannot listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gridpath-server".to_owned());

        let config = match parse_options(args) {
            Ok(config) => config,
            Err(ConfigError::HelpRequested) => {
                println!("{}", usage(&program));
                return Ok(());
            }
            Err(err) => {
                eprintln!("{program}: {err}\n\n{}", usage(&program));
                std::process::exit(2);
            }
        };

        let service = GridService::from_config(&config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
            info!(
                "serving {}x{} grid on http://{}",
                config.board.rows,
                config.board.cols,
                listener.local_addr()?
            );
            axum::serve(listener, router(service))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}
