use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    /// Public URL of the stored file.
    pub url: String,
    /// Opaque name the file was stored under.
    pub stored_name: String,
    /// Client supplied file name, kept for display only.
    pub original_name: String,
    pub size: u64,
    /// Editor callback to invoke with the URL.
    pub callback: u64,
}
