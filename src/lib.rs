#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod field;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod table;

pub use common::*;
pub use config::*;
pub use field::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use table::{CellRecord, CellTable};
