// src/application/commands/pages/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod update;
mod upload;

pub use create::CreatePageCommand;
pub use delete::DeletePageCommand;
pub use service::PageCommandService;
pub use update::UpdatePageCommand;
pub use upload::{ALLOWED_IMAGE_EXTENSIONS, UploadImageCommand, UploadPolicy};
