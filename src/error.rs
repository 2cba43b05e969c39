//! Error types for the node status codec and client

use std::convert::TryFrom;
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for node status operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for node status operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid argument passed into the codec or client
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid NetBIOS name
    #[error("Invalid NetBIOS name: {0}")]
    InvalidNetBiosName(String),

    /// Protocol error in a received datagram
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Datagram larger than the protocol allows
    #[error("Datagram too large: {len} bytes exceeds maximum {max}")]
    DatagramTooLarge { len: usize, max: usize },

    /// Buffer too small
    #[error("Buffer too small: need {need} bytes, have {have}")]
    BufferTooSmall { need: usize, have: usize },

    /// Declared name count does not match the datagram length
    #[error("Length mismatch: {num_names} names require {expected} bytes, received {actual}")]
    LengthMismatch {
        num_names: u8,
        expected: usize,
        actual: usize,
    },

    /// Unexpected resource record type
    #[error("Unexpected resource record type 0x{0:04x}")]
    UnexpectedRecordType(u16),

    /// Name list could not be allocated
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// Socket layer could not be initialised
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    /// Peer set the truncation flag
    #[error("Truncation flag was set in response")]
    Truncated,

    /// Timeout occurred
    #[error("Operation timed out after {0} ms")]
    Timeout(u64),

    /// Decoder bookkeeping disagreed with the validated length
    #[error("Internal inconsistency: consumed {consumed} bytes of {length}")]
    InternalInconsistency { consumed: usize, length: usize },
}

impl Error {
    /// Classify this error into its stable kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(e) => match e.kind() {
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ErrorKind::Timeout,
                _ => ErrorKind::SocketError,
            },
            Error::InvalidArgument(_) | Error::InvalidNetBiosName(_) => {
                ErrorKind::InvalidArgument
            }
            Error::Protocol(_)
            | Error::DatagramTooLarge { .. }
            | Error::BufferTooSmall { .. }
            | Error::LengthMismatch { .. }
            | Error::UnexpectedRecordType(_) => ErrorKind::Protocol,
            Error::OutOfMemory(_) => ErrorKind::OutOfMemory,
            Error::TransportUnavailable(_) => ErrorKind::TransportUnavailable,
            Error::Truncated => ErrorKind::TruncatedFlagSet,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::InternalInconsistency { .. } => ErrorKind::InternalInconsistency,
        }
    }

    /// Stable numeric code of this error
    pub fn code(&self) -> u32 {
        self.kind().code()
    }
}

/// Stable error kinds reported to callers (subset of the classic NBSTAT codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorKind {
    /// The operation completed successfully
    Ok = 0x000,
    /// Allocation failure while building the name list
    OutOfMemory = 0x101,
    /// Malformed call into the codec
    InvalidArgument = 0x102,
    /// Socket layer initialisation failure
    TransportUnavailable = 0x103,
    /// Socket creation, send or receive failure
    SocketError = 0x104,
    /// Generic protocol error
    Protocol = 0x105,
    /// Truncation flag in response
    TruncatedFlagSet = 0x106,
    /// No response within the configured window
    Timeout = 0x107,
    /// Post-parse byte count mismatch
    InternalInconsistency = 0x200,
}

impl TryFrom<u32> for ErrorKind {
    type Error = u32;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        match value {
            0x000 => Ok(ErrorKind::Ok),
            0x101 => Ok(ErrorKind::OutOfMemory),
            0x102 => Ok(ErrorKind::InvalidArgument),
            0x103 => Ok(ErrorKind::TransportUnavailable),
            0x104 => Ok(ErrorKind::SocketError),
            0x105 => Ok(ErrorKind::Protocol),
            0x106 => Ok(ErrorKind::TruncatedFlagSet),
            0x107 => Ok(ErrorKind::Timeout),
            0x200 => Ok(ErrorKind::InternalInconsistency),
            other => Err(other),
        }
    }
}

impl ErrorKind {
    /// Numeric code of this kind
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Human-readable description of this kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::Ok => "operation completed successfully",
            ErrorKind::OutOfMemory => "memory allocation failure",
            ErrorKind::InvalidArgument => "an invalid argument was passed to a library function",
            ErrorKind::TransportUnavailable => "could not initialize the sockets layer",
            ErrorKind::SocketError => "the system could not allocate a socket descriptor",
            ErrorKind::Protocol => "malformed or unexpected response from peer",
            ErrorKind::TruncatedFlagSet => "truncation flag was set in response",
            ErrorKind::Timeout => "request expired",
            ErrorKind::InternalInconsistency => "internal decoder inconsistency",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.description(), *self as u32)
    }
}

/// Look up the description for a raw error code
pub fn describe(code: u32) -> &'static str {
    ErrorKind::try_from(code)
        .map(ErrorKind::description)
        .unwrap_or("unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        assert_eq!(ErrorKind::Ok.code(), 0x000);
        assert_eq!(ErrorKind::Protocol.code(), 0x105);
        assert_eq!(ErrorKind::Timeout.code(), 0x107);
        assert_eq!(ErrorKind::InternalInconsistency.code(), 0x200);
    }

    #[test]
    fn test_error_kind_from_u32() {
        assert_eq!(ErrorKind::try_from(0x104), Ok(ErrorKind::SocketError));
        assert_eq!(ErrorKind::try_from(0x106), Ok(ErrorKind::TruncatedFlagSet));
        assert_eq!(ErrorKind::try_from(0x999), Err(0x999));
    }

    #[test]
    fn test_describe_unknown_code() {
        assert_eq!(describe(0x107), "request expired");
        assert_eq!(describe(0xFFFF_FFFF), "unknown error");
    }

    #[test]
    fn test_error_classification() {
        assert_eq!(
            Error::DatagramTooLarge { len: 600, max: 576 }.kind(),
            ErrorKind::Protocol
        );
        assert_eq!(Error::UnexpectedRecordType(0x20).kind(), ErrorKind::Protocol);
        assert_eq!(
            Error::InternalInconsistency {
                consumed: 10,
                length: 11
            }
            .kind(),
            ErrorKind::InternalInconsistency
        );
        assert_eq!(Error::Truncated.kind(), ErrorKind::TruncatedFlagSet);
        assert_eq!(
            Error::InvalidNetBiosName("too long".into()).kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_io_error_classification() {
        let timed_out = Error::from(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert_eq!(timed_out.kind(), ErrorKind::Timeout);

        let refused = Error::from(io::Error::new(io::ErrorKind::ConnectionRefused, "no"));
        assert_eq!(refused.kind(), ErrorKind::SocketError);
        assert_eq!(refused.code(), 0x104);
    }

    #[test]
    fn test_error_kind_display() {
        let display = format!("{}", ErrorKind::Protocol);
        assert!(display.contains("malformed"));
        assert!(display.contains("0x0105"));
    }
}
