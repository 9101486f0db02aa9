//! File name and path utilities.

pub mod ids;
pub mod paths;
