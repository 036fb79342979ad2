pub mod config;
pub mod error;
pub mod install;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod source;
pub mod status;
pub mod types;

pub use error::{AgenticError, FetchError, Result};
