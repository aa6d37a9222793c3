pub mod error;
pub mod lcd;
#[cfg(test)]
mod test_util;
pub mod types;

pub use error::{CoreError, LcdError};
pub use types::BroadcastMode;
