use crate::models::ResizeDimensions;
use thiserror::Error;
use validator::Validate;

/// Largest edge accepted by the resize endpoint
pub const MAX_DIMENSION: u32 = 16_384;

/// Request validation failures, each with the fixed message sent to clients
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nenhum arquivo enviado")]
    MissingFile,

    #[error("Nenhum arquivo selecionado")]
    EmptyFilename,

    #[error("Largura e altura são obrigatórios")]
    MissingDimensions,

    #[error("Largura e altura devem ser no máximo 16384")]
    DimensionsTooLarge,

    #[error("São necessários dois arquivos (file1 e file2)")]
    MissingFiles,

    #[error("Dois arquivos devem ser selecionados")]
    EmptyFilenames,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingFile => "MISSING_FILE",
            ValidationError::EmptyFilename => "EMPTY_FILENAME",
            ValidationError::MissingDimensions => "MISSING_DIMENSIONS",
            ValidationError::DimensionsTooLarge => "DIMENSIONS_TOO_LARGE",
            ValidationError::MissingFiles => "MISSING_FILES",
            ValidationError::EmptyFilenames => "EMPTY_FILENAMES",
        }
    }
}

/// Parse a single integer form value. Surrounding whitespace is tolerated.
fn parse_dimension(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok())
}

/// Parse and validate the `largura`/`altura` pair of the resize endpoint.
///
/// Absent, non-numeric, negative and zero values are all rejected as
/// missing dimensions.
pub fn parse_dimensions(
    largura: Option<&str>,
    altura: Option<&str>,
) -> Result<ResizeDimensions, ValidationError> {
    let (Some(width), Some(height)) = (parse_dimension(largura), parse_dimension(altura)) else {
        return Err(ValidationError::MissingDimensions);
    };

    let dimensions = ResizeDimensions { width, height };
    dimensions.validate().map_err(|_| {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            ValidationError::DimensionsTooLarge
        } else {
            ValidationError::MissingDimensions
        }
    })?;

    Ok(dimensions)
}
