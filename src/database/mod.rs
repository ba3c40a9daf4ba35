mod connection;
mod error;

pub mod clock;

pub use connection::*;
pub use error::*;
