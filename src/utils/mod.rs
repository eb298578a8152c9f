//! Utility functions shared by the API layer and the admin CLI.
//!
//! - [`timestamp`] - Parsing of filter bounds and rendering of `createdAt`

pub mod timestamp;
