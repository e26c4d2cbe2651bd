use crate::api::error::AppError;
use crate::services::digest::DigestService;
use crate::services::run_blocking;
use crate::utils::form::UploadForm;
use axum::Json;
use tracing::info;

use super::types::*;

#[utoipa::path(
    post,
    path = "/calcula-hash",
    request_body(content = Multipart, description = "`file` plus optional `nomeOriginal`"),
    responses(
        (status = 200, description = "MD5, SHA-1, SHA-256 and SHA-384 digests", body = HashResponse),
        (status = 400, description = "No file sent or empty filename"),
        (status = 500, description = "Digest computation failed")
    ),
    tag = "hashes"
)]
pub async fn compute_digests(form: UploadForm) -> Result<Json<HashResponse>, AppError> {
    let file = form.require_file("file")?;
    let file_name = file.display_name(form.field("nomeOriginal"));

    info!("Computing digests for {} ({} bytes)", file_name, file.len());

    let content = file.content.clone();
    let hashes = run_blocking(move || Ok(DigestService::compute(&content))).await?;

    Ok(Json(HashResponse { file_name, hashes }))
}

#[utoipa::path(
    post,
    path = "/compara-hashes",
    request_body(content = Multipart, description = "`file1`, `file2` plus optional `nomeOriginal1`/`nomeOriginal2`"),
    responses(
        (status = 200, description = "Per-algorithm comparison of both files", body = CompareResponse),
        (status = 400, description = "One of the two files is missing or unnamed"),
        (status = 500, description = "Digest computation failed")
    ),
    tag = "hashes"
)]
pub async fn compare_files(form: UploadForm) -> Result<Json<CompareResponse>, AppError> {
    let (first, second) = form.require_pair("file1", "file2")?;

    let files = ComparedFiles {
        file1: first.display_name(form.field("nomeOriginal1")),
        file2: second.display_name(form.field("nomeOriginal2")),
    };

    info!(
        "Comparing {} ({} bytes) with {} ({} bytes)",
        files.file1,
        first.len(),
        files.file2,
        second.len()
    );

    let (content1, content2) = (first.content.clone(), second.content.clone());
    let (hashes1, hashes2) = run_blocking(move || {
        Ok((
            DigestService::compute(&content1),
            DigestService::compute(&content2),
        ))
    })
    .await?;

    let comparison = DigestService::compare(&hashes1, &hashes2);

    Ok(Json(CompareResponse {
        files,
        hashes: ComparedHashes {
            file1: hashes1,
            file2: hashes2,
        },
        comparison,
        identical: comparison.all_identical(),
    }))
}
