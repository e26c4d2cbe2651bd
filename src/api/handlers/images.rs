use crate::api::error::AppError;
use crate::services::imaging::ImageService;
use crate::services::run_blocking;
use crate::utils::form::UploadForm;
use crate::utils::validation::{ValidationError, parse_dimensions};
use axum::{
    Json,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use super::types::*;

/// Attachment name of the grayscale endpoint
pub const GRAYSCALE_FILENAME: &str = "imagem_cinza.png";

fn png_attachment(data: Vec<u8>, filename: &str) -> Response {
    let headers = [
        (header::CONTENT_TYPE, mime::IMAGE_PNG.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    (headers, data).into_response()
}

#[utoipa::path(
    post,
    path = "/calcula-pixels",
    request_body(content = Multipart, description = "`file` plus optional `nomeOriginal`"),
    responses(
        (status = 200, description = "Image dimensions and pixel count", body = PixelResponse),
        (status = 400, description = "No file sent or empty filename"),
        (status = 500, description = "File is not a readable image")
    ),
    tag = "images"
)]
pub async fn compute_pixel_metadata(form: UploadForm) -> Result<Json<PixelResponse>, AppError> {
    let file = form.require_file("file")?;
    let file_name = file.display_name(form.field("nomeOriginal"));

    let dims = ImageService::dimensions(&file.content)?;
    info!("{} is {}x{}", file_name, dims.width, dims.height);

    Ok(Json(PixelResponse {
        file_name,
        dimensions: DimensionsBody {
            width: format!("{}px", dims.width),
            height: format!("{}px", dims.height),
        },
        total_pixels: dims.total_pixels(),
    }))
}

#[utoipa::path(
    post,
    path = "/redimensiona-imagem",
    request_body(content = Multipart, description = "`file`, `largura` and `altura`"),
    responses(
        (status = 200, description = "Resized image as a PNG attachment"),
        (status = 400, description = "No file sent, empty filename or invalid dimensions"),
        (status = 500, description = "Decoding, resizing or encoding failed")
    ),
    tag = "images"
)]
pub async fn resize_image(form: UploadForm) -> Result<Response, AppError> {
    let file = form.file("file").ok_or(ValidationError::MissingFile)?;
    let target = parse_dimensions(form.field("largura"), form.field("altura"))?;
    file.ensure_selected()?;

    info!("Resizing {} to {}x{}", file.file_name, target.width, target.height);

    let content = file.content.clone();
    let png = run_blocking(move || ImageService::resize(&content, target)).await?;

    Ok(png_attachment(png, &target.attachment_name()))
}

#[utoipa::path(
    post,
    path = "/filtro-imagem",
    request_body(content = Multipart, description = "`file`"),
    responses(
        (status = 200, description = "Grayscale image as a PNG attachment"),
        (status = 400, description = "No file sent or empty filename"),
        (status = 500, description = "Decoding, conversion or encoding failed")
    ),
    tag = "images"
)]
pub async fn grayscale_filter(form: UploadForm) -> Result<Response, AppError> {
    let file = form.require_file("file")?;

    info!("Converting {} to grayscale", file.file_name);

    let content = file.content.clone();
    let png = run_blocking(move || ImageService::grayscale(&content)).await?;

    Ok(png_attachment(png, GRAYSCALE_FILENAME))
}
