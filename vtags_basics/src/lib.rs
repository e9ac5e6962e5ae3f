//! Infrastructure shared by the vtags crates.

pub mod source;
