//! Miscellaneous items, for the moment limited to logging.

pub mod log;
