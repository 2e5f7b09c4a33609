//! DBFS wire models, remote path derivation, and timestamp conversion.

pub mod api;
pub mod path;
pub mod time;

pub use api::{DeleteRequest, FileStatus, ListResponse, PutRequest};
pub use path::remote_path;
pub use time::millis_to_rfc3339;
