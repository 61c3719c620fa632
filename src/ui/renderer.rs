//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from the state, then
//! hand it to the component layout. Nothing here reads state directly, which
//! keeps every formatting decision testable through the view model.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel: UIViewModel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, rows, cols);
}
