//! Reusable UI components for the invitation
//!
//! Form controls and wizard widgets share the orange/pink/purple gradient
//! palette and rounded, touch-friendly sizing.

mod attendance_choice;
mod button;
mod guest_stepper;
mod input;
mod step_progress;

pub use attendance_choice::*;
pub use button::*;
pub use guest_stepper::*;
pub use input::*;
pub use step_progress::*;
