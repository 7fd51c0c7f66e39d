//! Controller layer: UI events, intent orchestration, and toast bookkeeping.

pub mod events;
pub mod orchestration;
pub mod toasts;
