pub mod record;

pub use record::{CreateRecordRequest, DeleteRecordRequest, RecordResponse, UpdateRecordRequest};
