//! Unified application error type.
//! All modules (core, store, render, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Calendar / parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid shift slot: {0}")]
    InvalidSlot(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Schedule not found: {0}")]
    NotFound(String),

    #[error("Corrupt schedule record '{id}': {reason}")]
    CorruptRecord { id: String, reason: String },

    // ---------------------------
    // Render / export errors
    // ---------------------------
    #[error("Cannot write '{}': {source}", path.display())]
    RenderIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wraps an I/O failure on a render/export destination.
    pub fn render_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::RenderIo {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(id: &str, reason: impl std::fmt::Display) -> Self {
        AppError::CorruptRecord {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
