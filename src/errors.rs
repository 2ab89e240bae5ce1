//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Session log persistence
    // ---------------------------
    #[error("Session log error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Session log error: {0}")]
    Persistence(String),

    // ---------------------------
    // Timer contract violations
    // ---------------------------
    #[error("Invalid duration: {0} seconds")]
    InvalidDuration(i64),

    #[error("Invalid timer state: {0}")]
    InvalidState(String),

    #[error("Clock regression: {0}")]
    ClockRegression(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
