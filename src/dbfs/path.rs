//! Derivation of managed remote paths.
//!
//! Every managed file lives under a fixed DBFS prefix; the remote name is
//! always the local file's base name. The remote path is never supplied by
//! configuration, so two local files with the same base name map to the same
//! remote path.

/// Fixed DBFS prefix under which managed files are stored.
pub const LIB_PREFIX: &str = "/FileStore/jars/init-libs";

/// Derives the remote DBFS path for a local file's base name.
#[must_use]
pub fn remote_path(file_name: &str) -> String {
    format!("{LIB_PREFIX}/{file_name}")
}
