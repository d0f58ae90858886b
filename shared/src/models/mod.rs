//! Domain models for the FloraWatch platform

mod flowering;
mod weather;

pub use flowering::*;
pub use weather::*;
