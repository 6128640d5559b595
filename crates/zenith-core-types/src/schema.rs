//! Canonical schema constants for structured logging and events
//!
//! The logging macros emit these keys and events; the test capture layer
//! reads them back.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Response header carrying the request correlation id
pub const HEADER_REQUEST_ID: &str = "x-request-id";
