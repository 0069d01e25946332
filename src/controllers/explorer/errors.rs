use crate::core::fractals::mandelbrot::errors::EscapeTimeError;
use crate::core::viewport::ViewportError;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ExplorerError {
    Viewport(ViewportError),
    EscapeTime(EscapeTimeError),
    Io(io::Error),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::EscapeTime(err) => write!(f, "invalid escape settings: {}", err),
            Self::Io(err) => write!(f, "terminal i/o failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::EscapeTime(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<EscapeTimeError> for ExplorerError {
    fn from(err: EscapeTimeError) -> Self {
        Self::EscapeTime(err)
    }
}

impl From<io::Error> for ExplorerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
