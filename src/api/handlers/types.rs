use crate::models::{ComparisonResult, DigestSet};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HashResponse {
    #[serde(rename = "Nome do arquivo")]
    pub file_name: String,
    pub hashes: DigestSet,
}

#[derive(Serialize, ToSchema)]
pub struct DimensionsBody {
    /// Width formatted as `<n>px`
    pub width: String,
    /// Height formatted as `<n>px`
    pub height: String,
}

#[derive(Serialize, ToSchema)]
pub struct PixelResponse {
    #[serde(rename = "Nome do arquivo")]
    pub file_name: String,
    #[serde(rename = "dimensões")]
    pub dimensions: DimensionsBody,
    #[serde(rename = "total de pixels")]
    pub total_pixels: u64,
}

#[derive(Serialize, ToSchema)]
pub struct ComparedFiles {
    pub file1: String,
    pub file2: String,
}

#[derive(Serialize, ToSchema)]
pub struct ComparedHashes {
    pub file1: DigestSet,
    pub file2: DigestSet,
}

#[derive(Serialize, ToSchema)]
pub struct CompareResponse {
    pub files: ComparedFiles,
    pub hashes: ComparedHashes,
    #[serde(rename = "Comparação")]
    pub comparison: ComparisonResult,
    #[serde(rename = "São identicos")]
    pub identical: bool,
}
