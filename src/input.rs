//! Input loading module.

pub mod translation;
