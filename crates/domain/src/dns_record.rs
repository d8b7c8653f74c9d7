pub mod payload;
pub mod record_type;
pub mod view;

pub use payload::{MxPayload, RecordPayload, SoaPayload, SrvPayload};
pub use record_type::RecordType;
pub use view::{RecordRequest, RecordView};
