use crate::cli::commands::ServeArgs;
use crate::errors::AuditError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), AuditError> {
    let runtime = super::load_runtime(args.llm.config.as_deref(), &args.overrides()).await?;
    let addr = runtime.bind_addr();
    info!(addr = %addr, overlap = runtime.overlap.as_str(), "Starting API server");

    let state = api::AppState::new(super::build_provider(&runtime), runtime.overlap);
    let app = api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AuditError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
