pub mod error;
pub mod ring;
mod trace_macro;

// Public API - these are what users should use
pub use error::SpscBufError;
pub use ring::Ring;

// Re-export for convenience
pub use eyre::Result;
