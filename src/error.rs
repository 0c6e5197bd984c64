// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidDimension { width: u32, height: u32 },  // Surface asked for a zero-sized buffer
    ResourceExhausted { width: u32, height: u32 }, // Surface buffer could not be allocated
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
    Config(String),       // Reading/parsing the settings file failed
    Save(String),         // Writing the drawing to the gallery failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { width, height } => {
                write!(f, "Invalid surface dimension: {width}x{height}")
            }
            Error::ResourceExhausted { width, height } => {
                write!(f, "Out of memory allocating a {width}x{height} surface")
            }
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::Save(s) => write!(f, "Save error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
