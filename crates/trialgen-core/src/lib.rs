//! trialgen-core — word list to trial data conversion.
//!
//! This crate exposes each stage of the conversion pipeline as a public
//! module, plus the shared types used across all stages.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Normalizer ──► Parser ──► Grouper ──► Transform ──► Emitter
//! ```
//!
//! Everything runs synchronously in a single pass. [`pipeline::convert`]
//! drives the in-memory stages; the binary adds file I/O around it.

pub mod config;
pub mod emitter;
pub mod error;
pub mod grouper;
pub mod loader;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod transform;
pub mod types;

pub use error::{ConvertError, Result};
pub use types::{Bucket, Buckets, RawRecord, Trial};
