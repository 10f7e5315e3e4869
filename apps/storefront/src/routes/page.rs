use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::filter::ViewState;
use crate::render::{render_page, PageOptions};
use crate::state::AppState;

/// View state as it appears in the URL: `?q=<search>&cats=<k1,k2,...>`.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub q: Option<String>,
    pub cats: Option<String>,
}

impl ViewParams {
    pub fn into_state(self) -> Result<ViewState, AppError> {
        Ok(ViewState::from_params(
            self.q.as_deref(),
            self.cats.as_deref(),
        )?)
    }
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, AppError> {
    let view = params.into_state()?;
    debug!(
        query = view.query(),
        categories = view.active().len(),
        "Rendering storefront page"
    );
    let options = PageOptions {
        year: Utc::now().year(),
        download_available: state.config.resume_pdf_path.is_some(),
    };
    Ok(Html(render_page(&state.catalog, &view, options)))
}
