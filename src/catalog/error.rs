use std::fmt;
use thiserror::Error;

/// Which upstream document a fetch was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Roster,
    Profile,
    Locations,
    Dates,
    Relations,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Roster => "roster",
            ResourceKind::Profile => "profile",
            ResourceKind::Locations => "locations",
            ResourceKind::Dates => "dates",
            ResourceKind::Relations => "relations",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The GET could not be issued or the connection failed (includes timeouts).
    #[error("{resource} request to {url} failed: {reason}")]
    Transport {
        resource: ResourceKind,
        url: String,
        reason: String,
    },

    #[error("failed to read {resource} response body from {url}: {reason}")]
    Read {
        resource: ResourceKind,
        url: String,
        reason: String,
    },

    #[error("failed to parse {resource} JSON from {url}: {reason}")]
    Decode {
        resource: ResourceKind,
        url: String,
        reason: String,
    },

    /// Only produced when status checking is enabled.
    #[error("{resource} request to {url} returned HTTP {status}")]
    Status {
        resource: ResourceKind,
        url: String,
        status: u16,
    },
}

impl FetchError {
    pub fn resource(&self) -> ResourceKind {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Read { resource, .. }
            | FetchError::Decode { resource, .. }
            | FetchError::Status { resource, .. } => *resource,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Read { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Status { url, .. } => url,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
