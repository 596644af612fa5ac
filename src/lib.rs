pub use error::{Result, RevMapError};
pub use map::StringMap;

mod error;
mod map;
