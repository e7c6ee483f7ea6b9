//! Strategy AI for LANEWARDEN.
//!
//! Implements threat assessment and the four-mode posture state machine
//! (Cycle, Defend, Counter, Push) that drives the automated opponent.

pub mod controller;
pub mod fsm;
pub mod threat;

pub use controller::ModeController;
pub use lanewarden_core as core;
