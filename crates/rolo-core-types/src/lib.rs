//! Core types shared across Rolo facilities
//!
//! This crate provides foundational types used by the command pipeline,
//! the error facility and the logging facility:
//!
//! - **Correlation types**: RequestId, SessionId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for redacting contact data in logs
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId, SessionId};
pub use sensitive::Sensitive;
