// src/application/ports/mod.rs
pub mod html;
pub mod storage;
pub mod time;
pub mod util;
