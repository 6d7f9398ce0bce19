// src/application/commands/pages/upload.rs
use uuid::Uuid;

use super::PageCommandService;
use crate::application::{
    dto::UploadedImageDto,
    error::{ApplicationError, ApplicationResult},
    validation::FieldErrors,
};

pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Image sent by the rich text editor's upload widget.
#[derive(Debug, Clone)]
pub struct UploadImageCommand {
    pub original_name: String,
    pub bytes: Vec<u8>,
    /// Raw `CKEditorFuncNum` value.
    pub callback: Option<String>,
}

impl PageCommandService {
    pub async fn upload_image(
        &self,
        command: UploadImageCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        let mut errors = FieldErrors::new();

        let callback = match command.callback.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let parsed = raw.parse::<u64>().ok();
                if parsed.is_none() {
                    errors.add("CKEditorFuncNum", "The CKEditorFuncNum must be a number.");
                }
                parsed
            }
            _ => {
                errors.add("CKEditorFuncNum", "The CKEditorFuncNum field is required.");
                None
            }
        };

        let original_name = display_name(&command.original_name).to_string();
        let extension = image_extension(&original_name);
        if extension.is_none() {
            errors.add(
                "upload",
                format!(
                    "The upload must be a file of type: {}.",
                    ALLOWED_IMAGE_EXTENSIONS.join(", ")
                ),
            );
        }
        if command.bytes.len() > self.upload_policy.max_bytes {
            errors.add(
                "upload",
                format!(
                    "The upload may not be greater than {} kilobytes.",
                    self.upload_policy.max_bytes / 1024
                ),
            );
        }

        errors.into_result()?;

        let (Some(callback), Some(extension)) = (callback, extension) else {
            return Err(ApplicationError::validation("incomplete upload"));
        };

        let stored_name = format!("{}.{extension}", Uuid::new_v4());
        let url = self.image_store.put(&stored_name, &command.bytes).await?;
        let size = u64::try_from(command.bytes.len()).unwrap_or(u64::MAX);

        tracing::info!(
            stored_name = %stored_name,
            original_name = %original_name,
            size,
            "editor image uploaded"
        );

        Ok(UploadedImageDto {
            url,
            stored_name,
            original_name,
            size,
            callback,
        })
    }
}

/// Last path component of a client supplied file name.
fn display_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim()
}

fn image_extension(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let extension = extension.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}
