//! Translation between management requests and DNS resource records.
pub mod canonical;
pub mod record_type_map;
pub mod render;
pub mod resource;

pub use canonical::{canonical_bytes, same_record};
pub use record_type_map::RecordTypeMapper;
pub use render::{render_data, render_name, render_record};
pub use resource::{parse_owner, to_resource};
