//! Runtime error types

use thiserror::Error;

/// Errors raised while wiring a plugin to its host
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid builder or logging input
    #[error("Invalid plugin configuration: {0}")]
    Config(String),

    /// A host service the plugin depends on was not provided
    #[error("Missing host service {capability}: {message}")]
    CapabilityMissing {
        capability: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
