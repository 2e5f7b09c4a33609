//! Live adapters backed by real HTTP and disk I/O.

pub mod dbfs;
pub mod files;

pub use dbfs::LiveDbfsApi;
pub use files::LiveLocalFiles;
