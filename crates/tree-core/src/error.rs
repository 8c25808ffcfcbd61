use thiserror::Error;

/// Rejected [`TreeParams`](crate::TreeParams) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tree height must be positive and finite, got {0}")]
    TreeHeight(f32),
    #[error("max radius must be positive and finite, got {0}")]
    MaxRadius(f32),
    #[error("chaos shell radius must be non-negative and finite, got base={base} spread={spread}")]
    ChaosShell { base: f32, spread: f32 },
    #[error("bottom ornament fraction must be in (0, 1], got {0}")]
    BottomFraction(f32),
}
