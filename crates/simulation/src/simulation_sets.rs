//! Per-frame ordering via `SystemSet` phases.
//!
//! ```text
//! Input  →  Animate  →  Sync
//! ```
//!
//! * **Input**: Selection requests are applied and the visibility state
//!   machine runs. The only phase that changes which effects are visible.
//! * **Animate**: Every visible effect advances one step.
//! * **Sync**: The rendering layer copies core state into meshes, lights,
//!   clear color, and fog. Reads only.
//!
//! The UI panel sends its requests before `Input`, so a click is visible in
//! the same frame it happens.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherSet {
    Input,
    Animate,
    Sync,
}

pub(crate) fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (WeatherSet::Input, WeatherSet::Animate, WeatherSet::Sync).chain(),
    );
}
