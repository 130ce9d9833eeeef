pub mod catalog;
pub mod core;
pub mod error;
pub mod format;
pub mod mandi;
pub mod persistence;
pub mod seed;
pub mod validate;

pub use crate::core::engine::DukaanEngine;
pub use crate::error::{Error, Result};
