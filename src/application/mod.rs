pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod settings;
pub mod validation;

pub use error::ApplicationResult;
