//! nts-cli library crate.
//!
//! NTS Radio schedule, streams and show art in the terminal. The binary in
//! `main.rs` is a thin wrapper around [`cli::run`].

pub mod api;
pub mod artwork;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod format;
pub mod player;
