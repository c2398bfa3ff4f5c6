//! sfxgen CLI library.
//!
//! Parameter loading and the command implementations behind the `sfxgen`
//! binary.

pub mod commands;
pub mod input;
