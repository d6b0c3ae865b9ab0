//! Core types for the retort admin console.
//!
//! This crate provides the foundational types for response formats:
//! - `ResponseFormat`, `FollowUpQuestion`, `AnswerOption` - The format tree
//! - `EntityId` - Identity tokens for committed records
//! - `FieldPath` - Dot/index-addressed paths into the format tree
//! - `validate_format` and `ValidationReport` - Submit-time schema validation
//! - `preview` - Plain-text rendering of a format

mod id;
pub use id::EntityId;

mod field_path;
pub use field_path::FieldPath;

mod model;
pub use model::{
    AnswerOption, FollowUpQuestion, ResponseFormat, DEFAULT_TEMPLATE, FOLLOW_UP_MARKER,
    RESPONSE_MARKER,
};

mod validate;
pub use validate::{validate_format, ValidationError, ValidationReport};

pub mod preview;
