// src/infrastructure/mod.rs
pub mod database;
pub mod html;
pub mod repositories;
pub mod storage;
pub mod time;
pub mod util;
