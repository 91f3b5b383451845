//! Error taxonomy for the snapshot/report surface.
//!
//! The calculators themselves are total (they return the not-computable
//! sentinel or a defined zero, never an error); this taxonomy covers the
//! I/O-and-decode surface around them.

/// Errors produced while loading or decoding exported snapshots.
#[derive(Debug, thiserror::Error)]
pub enum OkrError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, OkrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OkrError::InvalidSnapshot("objective without key results".to_string());
        assert!(err.to_string().contains("invalid snapshot"));
        assert!(err.to_string().contains("objective without key results"));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: OkrError = parse_err.into();
        assert!(err.to_string().contains("serialization error"));
    }
}
