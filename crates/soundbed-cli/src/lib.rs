//! soundbed CLI library.
//!
//! Command implementations for the `soundbed` binary: batch generation of
//! placeholder ambient sounds and an environment check.

pub mod commands;
pub mod transcode;
