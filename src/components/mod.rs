//! UI components.

pub mod sparks;
