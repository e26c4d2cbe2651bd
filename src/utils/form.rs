use crate::api::error::AppError;
use crate::models::UploadedFile;
use crate::utils::validation::ValidationError;
use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, multipart::MultipartError},
};
use std::collections::HashMap;

/// Files and text fields of one multipart request.
///
/// A part is treated as a file only when it carries a `filename` parameter,
/// even an empty one. Repeated names keep the first part.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name().map(|s| s.to_string()) {
                let content_type = field.content_type().map(|s| s.to_string());
                let content = field.bytes().await?;
                form.files.entry(name).or_insert(UploadedFile {
                    file_name,
                    content_type,
                    content,
                });
            } else {
                let text = field.text().await?;
                form.fields.entry(name).or_insert(text);
            }
        }

        Ok(form)
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Single-file endpoints: the part must exist and have a filename
    pub fn require_file(&self, name: &str) -> Result<&UploadedFile, ValidationError> {
        self.file(name)
            .ok_or(ValidationError::MissingFile)?
            .ensure_selected()
    }

    /// Two-file endpoints: both parts must exist, then both must have a filename
    pub fn require_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(&UploadedFile, &UploadedFile), ValidationError> {
        let (Some(a), Some(b)) = (self.file(first), self.file(second)) else {
            return Err(ValidationError::MissingFiles);
        };
        if a.file_name.is_empty() || b.file_name.is_empty() {
            return Err(ValidationError::EmptyFilenames);
        }
        Ok((a, b))
    }

    #[cfg(test)]
    pub(crate) fn insert_file(&mut self, name: &str, file_name: &str, content: &'static [u8]) {
        self.files.insert(
            name.to_string(),
            UploadedFile {
                file_name: file_name.to_string(),
                content_type: None,
                content: bytes::Bytes::from_static(content),
            },
        );
    }
}

#[async_trait]
impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Multipart::from_request(req, state).await {
            Ok(multipart) => Ok(Self::from_multipart(multipart).await?),
            // Not a multipart body, so nothing was uploaded
            Err(rejection) => {
                tracing::debug!("Request is not multipart: {}", rejection.body_text());
                Ok(Self::default())
            }
        }
    }
}
