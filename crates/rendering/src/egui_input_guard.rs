//! Guard against click-through from the 2D UI into the scene.
//!
//! A press on the view buttons or the detail panel must not double as an
//! orbit start, a hover, or a background miss underneath the widget, so
//! scene input systems consult this check first.

use bevy_egui::EguiContexts;

/// True while egui owns the pointer: the cursor sits on one of its areas or
/// a widget interaction is in progress. Scene input skips those frames.
#[inline]
pub fn pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}
