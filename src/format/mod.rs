pub mod container;
pub mod error;

pub use container::Container;
pub use error::{CompressError, FormatError};
