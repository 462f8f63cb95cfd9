pub(crate) mod images;

use axum::routing::{get, patch};

use crate::application::state::AppState;

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/images", get(images::list_images))
        .route(
            "/images/",
            get(images::list_images).patch(images::missing_image_id),
        )
        .route("/images/{image_id}", patch(images::flag_image))
}
