use thiserror::Error;
use zenith_core_types::RequestId;

/// Result type alias using ZenithError
pub type Result<T> = std::result::Result<T, ZenithError>;

/// Message surfaced to clients when an emotion has no quotes
pub const NO_QUOTES_MESSAGE: &str = "No quotes found for this emotion";

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in HTTP error bodies,
/// log events and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Validation
    InvalidInput,
    AlreadyExists,
    ConstraintViolation,

    // Runtime
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus whatever
/// context the failing operation could attach.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (emotion key, quote id or username)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by catalog, selection and user operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZenithError {
    // ===== Lookup Errors =====
    /// No quotes exist for the emotion (unknown key or empty pool)
    #[error("No quotes found for emotion: {emotion}")]
    QuotesNotFound { emotion: String },

    /// Emotion not found in the catalog
    #[error("Emotion not found: {emotion_id}")]
    EmotionNotFound { emotion_id: String },

    /// Quote not found in the catalog
    #[error("Quote not found: {quote_id}")]
    QuoteNotFound { quote_id: String },

    // ===== Insert-time Validation =====
    /// Emotion id is already taken
    #[error("Emotion already exists: {emotion_id}")]
    EmotionAlreadyExists { emotion_id: String },

    /// Quote references an emotion that is not in the catalog
    #[error("Quote references unknown emotion: {emotion}")]
    UnknownEmotion { emotion: String },

    /// Emotion record failed validation
    #[error("Invalid emotion: {reason}")]
    InvalidEmotion { reason: String },

    /// A quote with the same derived id is already present
    #[error("Quote already exists: {quote_id}")]
    QuoteAlreadyExists { quote_id: String },

    /// Quote record failed validation
    #[error("Invalid quote: {reason}")]
    InvalidQuote { reason: String },

    /// Username is already registered
    #[error("Username already exists: {username}")]
    UsernameTaken { username: String },

    /// Username failed validation
    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    // ===== Boundary Errors =====
    /// Request payload has the wrong shape
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    // ===== Runtime Errors =====
    /// The surrounding runtime failed (socket bind, server loop)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ZenithError> for ExError {
    fn from(err: ZenithError) -> Self {
        match err {
            ZenithError::QuotesNotFound { emotion } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(emotion)
                .with_message(NO_QUOTES_MESSAGE),

            ZenithError::EmotionNotFound { emotion_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(emotion_id)
                .with_message("Emotion not found"),

            ZenithError::QuoteNotFound { quote_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(quote_id)
                .with_message("Quote not found"),

            ZenithError::EmotionAlreadyExists { emotion_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(emotion_id)
                    .with_message("Emotion already exists")
            }

            ZenithError::QuoteAlreadyExists { quote_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(quote_id)
                    .with_message("Quote already exists")
            }

            ZenithError::UnknownEmotion { emotion } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(emotion)
                    .with_message("Quote references an emotion that is not in the catalog")
            }

            ZenithError::InvalidEmotion { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid emotion: {}", reason)),

            ZenithError::InvalidQuote { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid quote: {}", reason)),

            ZenithError::UsernameTaken { username } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(username)
                .with_message("Username already exists"),

            ZenithError::InvalidUsername { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid username: {}", reason)),

            ZenithError::InvalidRequest { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid request: {}", reason)),

            ZenithError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<&ZenithError> for ExError {
    fn from(err: &ZenithError) -> Self {
        err.clone().into()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_not_found_carries_client_message() {
        let ex: ExError = ZenithError::QuotesNotFound {
            emotion: "bored".to_string(),
        }
        .into();

        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.message(), NO_QUOTES_MESSAGE);
        assert_eq!(ex.entity_id(), Some("bored"));
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let ex = ExError::new(ExErrorKind::NotFound)
            .with_op("pick_random")
            .with_entity_id("bored")
            .with_message(NO_QUOTES_MESSAGE);

        let rendered = ex.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("pick_random"));
        assert!(rendered.contains("bored"));
    }

    #[test]
    fn test_request_id_none_by_default() {
        let ex = ExError::new(ExErrorKind::Internal);
        assert!(ex.request_id().is_none());
        assert!(ex.op().is_none());
    }

    #[test]
    fn test_internal_keeps_runtime_message() {
        let ex: ExError = ZenithError::Internal {
            message: "address in use".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::Internal);
        assert_eq!(ex.message(), "address in use");
    }
}
