//! Error handling and result types for OrderedMap operations.
//!
//! All fallible operations return a value from one closed error enumeration;
//! the `Display` implementation is the stable code-to-string mapping callers
//! may log. The map itself never logs, retries, or recovers on the caller's
//! behalf.

/// Error type for ordered map operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Key not found in the map.
    KeyNotFound,
    /// Node ID space or reserved storage exhausted.
    CapacityExceeded(String),
    /// Internal structure integrity violation.
    CorruptedTree(String),
    /// Cursor used after a failed reposition.
    IteratorInvalid,
    /// Cursor advanced past the final element.
    IteratorExhausted,
}

impl MapError {
    /// Create a CapacityExceeded error with context
    pub fn capacity_exceeded(resource: &str, details: &str) -> Self {
        Self::CapacityExceeded(format!("{}: {}", resource, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a key lookup miss
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }

    /// Check if this error is a cursor misuse error
    pub fn is_iterator_error(&self) -> bool {
        matches!(self, Self::IteratorInvalid | Self::IteratorExhausted)
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::KeyNotFound => write!(f, "Key not found in map"),
            MapError::CapacityExceeded(msg) => write!(f, "Capacity exceeded: {}", msg),
            MapError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
            MapError::IteratorInvalid => write!(f, "Iterator invalid"),
            MapError::IteratorExhausted => write!(f, "Iterator at end"),
        }
    }
}

impl std::error::Error for MapError {}

/// Public result type for map operations that may fail
pub type MapResult<T> = Result<T, MapError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, MapError>;

/// Result type for map modification operations
pub type ModifyResult<T> = Result<T, MapError>;
