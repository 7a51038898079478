//! Integration tests for tagvalid.
//!
//! Everything here goes through `#[derive(Validatable)]` and the public
//! entry points. Tests that change process-wide state use names no other
//! test touches.

mod common;
mod config;
mod derive;
mod messages;
mod properties;
mod rule_sets;
mod walking;
