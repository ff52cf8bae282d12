//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the decode and execute
//! paths so log consumers can filter on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_SESSION_ID: &str = "session_id";

// Grammar pipeline
pub const FIELD_IMPERATIVE: &str = "imperative";
pub const FIELD_PARAMETER_COUNT: &str = "parameter_count";
pub const FIELD_OPTION_COUNT: &str = "option_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical operation names
pub const OP_DECODE: &str = "decode";
pub const OP_EXECUTE: &str = "execute";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
