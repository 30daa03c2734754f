//! Résumé parsing endpoints: multipart upload and pre-extracted text.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::{extract_text, DocumentKind};
use crate::models::resume::ResumeRecord;
use crate::parser;
use crate::state::AppState;

/// Multipart field name carrying the document.
const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub data: ResumeRecord,
}

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload (field `resume`), extracts plain text from
/// the document, and runs the extraction pipeline over it.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let Some((filename, data)) = read_upload_field(&mut multipart).await? else {
        return Err(AppError::Validation(format!(
            "Missing multipart field '{UPLOAD_FIELD}'"
        )));
    };

    let kind = DocumentKind::from_filename(&filename)
        .ok_or_else(|| AppError::UnsupportedMediaType(format!("File type not allowed: {filename}")))?;

    info!(
        filename = %filename,
        bytes = data.len(),
        "parsing uploaded resume"
    );

    let text = extract_text(kind, &data);
    parse_and_respond(&state, &text).await
}

/// POST /api/v1/resumes/parse-text
///
/// Accepts a document whose text was already extracted upstream.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    parse_and_respond(&state, &req.text).await
}

async fn parse_and_respond(
    state: &AppState,
    text: &str,
) -> Result<Json<ParseResponse>, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Empty or unreadable document".to_string(),
        ));
    }

    let mut record = parser::parse_resume(text);
    parser::resolve_name_with_ner(&mut record, state.ner.as_ref()).await;

    info!(
        name = %record.name,
        skills = record.skills.len(),
        experience = record.experience.len(),
        education = record.education.len(),
        "resume parsed"
    );

    Ok(Json(ParseResponse {
        success: true,
        data: record,
    }))
}

/// Walks the multipart stream to the upload field, returning its filename
/// and bytes.
async fn read_upload_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("No selected file".to_string()))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Upload(format!("Failed to read upload: {e}")))?;
        return Ok(Some((filename, data)));
    }
    Ok(None)
}
