//! Events delivered to the app shell between frames.

use shared::protocol::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Notify(Notification),
}
