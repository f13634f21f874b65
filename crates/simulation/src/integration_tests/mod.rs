//! Integration tests using the `TestSky` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and drive it
//! through `SelectionRequest` events, the same path the UI panel uses.

mod animation_tests;
mod config_tests;
