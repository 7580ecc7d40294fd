pub mod config;
pub mod elements;
pub mod error;
pub mod types;
pub mod widget;

// Re-exports for convenience
pub use elements::*;
pub use error::LoaderError;
pub use types::*;
pub use widget::DependentSelect;
