use axum::{body::Bytes, response::Json};

use crate::error::AdminError;
use crate::imaging::{self, ImageReport};

pub async fn process_upload(body: Bytes) -> Result<Json<ImageReport>, AdminError> {
    if body.is_empty() {
        return Err(AdminError::ValidationError(
            "Please upload an image file to proceed.".to_string(),
        ));
    }

    let report = tokio::task::spawn_blocking(move || {
        imaging::process_image(&body).and_then(ImageReport::from_processed)
    })
    .await
    .map_err(|e| AdminError::InvalidImage(format!("image processing aborted: {}", e)))??;

    Ok(Json(report))
}
