use axum::Json;
use axum::extract::{Path, State};
use tracing::{error, info, warn};

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::presentation::web::views::ImageView;

#[tracing::instrument(skip(state))]
pub(crate) async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<ImageView>>, ApiError> {
    let images = state.image_repo.list_all().await.map_err(|err| {
        error!(error = %err, "failed to list images");
        AppError::NotFound
    })?;

    Ok(Json(images.into_iter().map(ImageView::from).collect()))
}

#[tracing::instrument(skip(state))]
pub(crate) async fn flag_image(
    State(state): State<AppState>,
    Path(image_id): Path<String>,
) -> Result<Json<ImageView>, ApiError> {
    if image_id.trim().is_empty() {
        return Err(missing_id().into());
    }

    let image = state.image_repo.toggle_flag(&image_id).await.map_err(|err| {
        warn!(error = %err, %image_id, "failed to toggle image flag");
        AppError::unprocessable(err.to_string())
    })?;

    info!(%image_id, flagged = image.flagged, "image flag toggled");
    Ok(Json(ImageView::from(image)))
}

/// `PATCH /api/images/` with no id segment.
pub(crate) async fn missing_image_id() -> ApiError {
    missing_id().into()
}

fn missing_id() -> AppError {
    warn!("missing image id");
    AppError::validation("missing image id")
}
