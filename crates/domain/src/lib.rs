//! Bramble DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordPayload, RecordRequest, RecordType, RecordView, SoaPayload};
pub use domain_name::validate_domain_name;
pub use errors::DomainError;
