//! UI layer for the card editor: app shell, card widgets, and theme.

pub mod app;
pub mod card;
pub mod theme;

pub use app::CardfolioApp;
