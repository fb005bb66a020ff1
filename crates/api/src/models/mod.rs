pub mod attr;
pub mod kind;
pub mod source;
pub mod tag;

pub use attr::*;
pub use kind::*;
pub use source::*;
pub use tag::*;
