//! Command families exposed through `cargo xtask`.

pub mod playground;
pub mod verify;
