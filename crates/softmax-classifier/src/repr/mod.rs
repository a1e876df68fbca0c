//! Canonical parameter representations.

mod linear;

pub use linear::{LinearParams, INIT_SCALE};
