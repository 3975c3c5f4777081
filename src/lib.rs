//! Public library API for inspecting and editing Blight light-definition files.

/// Blight container parsing, typed scalar conversion, field mutation, and rendering.
pub mod blight;
