//! Layout constants for DAE Fixer.

/// Spacing constants.
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Large font size
    pub const LG: f32 = 16.0;
}
