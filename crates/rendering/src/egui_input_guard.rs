//! Keeps camera controls from reacting to pointer input aimed at egui.
//!
//! Dragging or scrolling over the weather panel should not orbit or zoom the
//! camera underneath it.

use bevy_egui::EguiContexts;

/// `true` while the cursor is over an egui area or egui owns the current
/// drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
