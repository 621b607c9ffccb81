//! Unified error codes for the analytics engine
//!
//! This module defines all error codes used by the engine and its hosts.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: History store errors
//! - 2xxx: Analytics errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and a stable wire contract with host applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Input validation failed
    ValidationFailed = 2,
    /// Requested resource does not exist
    NotFound = 3,
    /// Request is malformed or not applicable
    InvalidRequest = 4,

    // ==================== 1xxx: History Store ====================
    /// History backend unreachable or failing
    UpstreamUnavailable = 1001,
    /// Item not found in the catalog
    ItemNotFound = 1002,
    /// Category not found in the catalog
    CategoryNotFound = 1003,
    /// History query failed (malformed range, backend rejection)
    HistoryQueryFailed = 1004,

    // ==================== 2xxx: Analytics ====================
    /// Analytics computation failed
    AnalyticsFailed = 2001,
    /// Requested time range is invalid (start after end)
    InvalidTimeRange = 2002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // History store
            ErrorCode::UpstreamUnavailable => "History store is unavailable",
            ErrorCode::ItemNotFound => "Item not found",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::HistoryQueryFailed => "History query failed",

            // Analytics
            ErrorCode::AnalyticsFailed => "Analytics computation failed",
            ErrorCode::InvalidTimeRange => "Invalid time range",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::InvalidRequest),

            // History store
            1001 => Ok(ErrorCode::UpstreamUnavailable),
            1002 => Ok(ErrorCode::ItemNotFound),
            1003 => Ok(ErrorCode::CategoryNotFound),
            1004 => Ok(ErrorCode::HistoryQueryFailed),

            // Analytics
            2001 => Ok(ErrorCode::AnalyticsFailed),
            2002 => Ok(ErrorCode::InvalidTimeRange),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
