use crate::api::HttpServer;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `serve` command: run the HTTP API until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Internal(format!("cannot start runtime: {e}")))?;

        tracing::info!(database = %cfg.database, "starting HTTP API");
        runtime.block_on(HttpServer::with_config(&cfg).start())?;
    }
    Ok(())
}
