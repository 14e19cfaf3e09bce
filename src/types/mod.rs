//! Types used throughout the library, for the moment limited to error types.

pub mod err;
