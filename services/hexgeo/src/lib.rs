//! hexgeo command-line tool library.
//!
//! This module exposes the command implementations for testing purposes.

pub mod commands;
pub mod output;
pub mod settings;
