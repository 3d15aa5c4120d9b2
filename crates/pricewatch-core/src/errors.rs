use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using the canonical error facility
pub type Result<T> = std::result::Result<T, PwError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, log filtering and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwErrorKind {
    // Structural/Validation
    InvalidInput,
    /// An entity record lacks a required field or carries one of the wrong type
    MalformedEntity,
    NotFound,

    // Snapshot storage
    /// A snapshot file exists but its content cannot be decoded
    CorruptSnapshot,

    // Fetch
    /// The upstream feed answered, but not with the expected document shape
    InvalidResponse,

    // Configuration
    /// A required configuration value is absent
    MissingConfig,
    /// A configuration value is present but unusable
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ExternalService,
    Timeout,

    // Internal
    Internal,
}

impl PwErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            PwErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            PwErrorKind::MalformedEntity => "ERR_MALFORMED_ENTITY",
            PwErrorKind::NotFound => "ERR_NOT_FOUND",
            PwErrorKind::CorruptSnapshot => "ERR_CORRUPT_SNAPSHOT",
            PwErrorKind::InvalidResponse => "ERR_INVALID_RESPONSE",
            PwErrorKind::MissingConfig => "ERR_MISSING_CONFIG",
            PwErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            PwErrorKind::Io => "ERR_IO",
            PwErrorKind::Serialization => "ERR_SERIALIZATION",
            PwErrorKind::Persistence => "ERR_PERSISTENCE",
            PwErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            PwErrorKind::Timeout => "ERR_TIMEOUT",
            PwErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, entity, snapshot date, path) for diagnostics.
#[derive(Debug, Clone)]
pub struct PwError {
    kind: PwErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    date: Option<NaiveDate>,
    path: Option<String>,
    message: String,
    source: Option<Box<PwError>>,
}

impl PwError {
    /// Create a new error with the specified kind
    pub fn new(kind: PwErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            date: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add snapshot date context
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl AsRef<std::path::Path>) -> Self {
        self.path = Some(path.as_ref().display().to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: PwError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> PwErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the snapshot date context, if any
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&PwError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for PwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(date) = self.date {
            write!(f, " (date: {})", date)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for PwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by pricewatch operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceWatchError {
    /// An entity record could not be read as an [`Entity`](crate::model::Entity)
    #[error("Malformed entity record at index {index}: {reason}")]
    MalformedEntity {
        index: usize,
        entity_id: Option<String>,
        reason: String,
    },

    /// A stored snapshot file could not be decoded
    #[error("Snapshot for {date} is corrupt: {reason}")]
    CorruptSnapshot { date: NaiveDate, reason: String },

    /// The upstream feed returned something other than the expected document
    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    /// A required configuration variable is not set
    #[error("Required configuration `{key}` is not set")]
    MissingConfig { key: String },

    /// A configuration value is set but unusable
    #[error("Invalid configuration `{key}`: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from PriceWatchError to PwError
impl From<PriceWatchError> for PwError {
    fn from(err: PriceWatchError) -> Self {
        let message = err.to_string();
        match err {
            PriceWatchError::MalformedEntity { entity_id, .. } => {
                let e = PwError::new(PwErrorKind::MalformedEntity)
                    .with_op("parse_entities")
                    .with_message(message);
                match entity_id {
                    Some(id) => e.with_entity_id(id),
                    None => e,
                }
            }

            PriceWatchError::CorruptSnapshot { date, .. } => {
                PwError::new(PwErrorKind::CorruptSnapshot)
                    .with_op("snapshot_read")
                    .with_date(date)
                    .with_message(message)
            }

            PriceWatchError::InvalidResponse { .. } => PwError::new(PwErrorKind::InvalidResponse)
                .with_op("fetch_snapshot")
                .with_message(message),

            PriceWatchError::MissingConfig { .. } => PwError::new(PwErrorKind::MissingConfig)
                .with_op("load_config")
                .with_message(message),

            PriceWatchError::InvalidConfig { .. } => PwError::new(PwErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(message),

            PriceWatchError::Serialization { .. } => {
                PwError::new(PwErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to PriceWatchError
impl From<serde_json::Error> for PriceWatchError {
    fn from(err: serde_json::Error) -> Self {
        PriceWatchError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> PwError {
    PwError::new(PwErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
