// src/lib.rs

//! i18n-sync Library
//!
//! Keeps per-language JSON translation bundles in the shape of a canonical
//! language's bundle.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;
