//! Command-line surface: argument definitions and interactive input

pub mod commands;
pub mod input;
