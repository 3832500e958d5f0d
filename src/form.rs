//! Event details form
//!
//! One text input per event field. The form is the source of truth for the
//! current `EventFields`; accepted suggestions are written back into it.

mod form_render;
mod form_state;

pub use form_render::render_form;
pub use form_state::FormState;
