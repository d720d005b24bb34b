use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::AdminError;

pub async fn download_backup(
    State((config, database)): State<AppState>,
) -> Result<Response, AdminError> {
    let bytes = database.backup_bytes().await?;
    let disposition = format!("attachment; filename=\"{}\"", config.backup_file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
