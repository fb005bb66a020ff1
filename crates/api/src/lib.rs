pub mod error;
pub mod models;
mod refs;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
#[cfg(feature = "tag-refs")]
pub use refs::live_tags;
