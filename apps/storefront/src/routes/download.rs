use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::render::page::DOWNLOAD_NOTICE;
use crate::state::AppState;

/// GET /resume.pdf
///
/// Streams the configured PDF. Without one the request fails loudly with the
/// download notice instead of returning an empty file.
pub async fn handle_resume_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(path) = state.config.resume_pdf_path.as_ref() else {
        info!("Resume download requested but no PDF is configured");
        return Err(AppError::NotImplemented(DOWNLOAD_NOTICE.to_string()));
    };

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Configured resume PDF {} does not exist", path.display());
            return Err(AppError::NotFound("Resume PDF is not available".to_string()));
        }
        Err(e) => {
            return Err(AppError::Internal(anyhow::Error::new(e).context(format!(
                "Failed to read resume PDF {}",
                path.display()
            ))))
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"resume.pdf\""),
        ],
        bytes,
    )
        .into_response())
}
