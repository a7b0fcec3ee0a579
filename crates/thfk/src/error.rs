//! Wire-level stable error taxonomy.
//!
//! `InvalidGrid` and `InvalidCoverOrder` are caller bugs — surfaced before any
//! computation starts. `OutOfMemory` and `Cancelled` are cooperative exits
//! from a running BFS; both are returned only after every allocation made by
//! that query has been released (see `bfs::is_null_homologous`).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    InvalidGrid { reason: String },
    InvalidCoverOrder { reason: String },
    OutOfMemory { reason: String },
    Cancelled,
}

impl Error {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_cover_order(reason: impl Into<String>) -> Self {
        Self::InvalidCoverOrder {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_memory(reason: impl Into<String>) -> Self {
        Self::OutOfMemory {
            reason: reason.into(),
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self::Cancelled
    }

    /// Exit code this error maps to in the CLI wrapper (spec §6).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidGrid { .. } | Self::InvalidCoverOrder { .. } => 2,
            Self::Cancelled => 3,
            Self::OutOfMemory { .. } => 4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { reason } => write!(f, "invalid grid diagram: {reason}"),
            Self::InvalidCoverOrder { reason } => write!(f, "invalid cover order: {reason}"),
            Self::OutOfMemory { reason } => write!(f, "memory budget exceeded: {reason}"),
            Self::Cancelled => write!(f, "computation cancelled"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_spec() {
        assert_eq!(Error::invalid_grid("x").exit_code(), 2);
        assert_eq!(Error::invalid_cover_order("x").exit_code(), 2);
        assert_eq!(Error::cancelled().exit_code(), 3);
        assert_eq!(Error::out_of_memory("x").exit_code(), 4);
    }
}
