// Crate-boundary error type.
//
// Internal helpers propagate failures with `anyhow::Result` and `?`,
// exactly as the rest of the protocol layer does; this enum exists so
// that `main` can match on what actually went wrong during startup
// rather than only printing an opaque chain.

use std::fmt;

#[derive(Debug)]
pub enum CompositorError {
    Io(std::io::Error),
    SocketBind(anyhow::Error),
    Shm(anyhow::Error),
}

impl fmt::Display for CompositorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositorError::Io(e) => write!(f, "i/o error: {}", e),
            CompositorError::SocketBind(e) => write!(f, "could not bind wayland socket: {}", e),
            CompositorError::Shm(e) => write!(f, "shared memory error: {}", e),
        }
    }
}

impl std::error::Error for CompositorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompositorError::Io(e) => Some(e),
            CompositorError::SocketBind(e) => Some(e.as_ref()),
            CompositorError::Shm(e) => Some(e.as_ref()),
        }
    }
}

impl From<std::io::Error> for CompositorError {
    fn from(e: std::io::Error) -> Self {
        CompositorError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, CompositorError>;
