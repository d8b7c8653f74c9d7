use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Record type not supported: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid record data: {0}")]
    InvalidPayload(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Snapshot is corrupt: {0}")]
    SnapshotCorrupt(String),

    #[error("Snapshot backup failed: {0}")]
    BackupFailed(String),

    #[error("Snapshot write failed: {0}")]
    PersistenceFailed(String),
}

impl DomainError {
    /// Errors caused by caller input rather than by the server itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::InvalidIpAddress(_)
                | DomainError::UnsupportedRecordType(_)
                | DomainError::InvalidPayload(_)
        )
    }

    /// Persistence failures after which the primary snapshot can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::PersistenceFailed(_) | DomainError::SnapshotCorrupt(_)
        )
    }
}
