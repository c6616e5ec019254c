//! Livestock Passport Common Library
//!
//! Web(WASM)フロントエンドと共有される型とロジック

pub mod types;
pub mod error;
pub mod validate;
pub mod workflow;
pub mod parser;

pub use types::{AnimalType, DetectErrorBody, DetectResponse, Passport, Recognition, Vaccination};
pub use error::{Error, Result, UploadError};
pub use validate::{validate, MAX_UPLOAD_BYTES};
pub use workflow::{FileMeta, UploadEvent, UploadState, UploadWorkflow};
pub use parser::{parse_error_detail, recognition_from_response, FALLBACK_ANALYZE_ERROR};
