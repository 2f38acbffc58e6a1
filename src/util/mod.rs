//! Utility modules

pub mod fit;
