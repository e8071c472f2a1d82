// =====================================================================
// File: error.rs
//
// Description:
//   Error type shared by the loaders and configuration. Lookups never
//   fail with an error; a miss is reported through `Option` instead.
// =====================================================================
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring a program or reading its records.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid table capacity '{0}': expected a positive whole number")]
    InvalidCapacity(String),
}

pub type Result<T> = std::result::Result<T, Error>;
