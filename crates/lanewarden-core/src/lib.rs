//! Core types and definitions for LANEWARDEN.
//!
//! This crate defines the vocabulary shared across all other crates:
//! observations, modes, components, events, configuration and constants.
//! It has no dependency on any simulation runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
pub mod units;
