//! Intent orchestration from rendered widgets into the card form controller.

use card_core::{CardFormController, Clock, Notifier, SaveResult};
use crossbeam_channel::{Sender, TrySendError};
use shared::protocol::{Intent, Notification};

use crate::controller::events::UiEvent;

/// Forwards save notifications to the app shell's event queue.
pub struct ChannelNotifier {
    ui_tx: Sender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self, notification: Notification) {
        match self.ui_tx.try_send(UiEvent::Notify(notification)) {
            Ok(()) => tracing::debug!("queued notification"),
            Err(TrySendError::Full(UiEvent::Notify(dropped))) => {
                tracing::warn!(message = %dropped.message, "ui event queue is full; dropping notification");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("ui event receiver disconnected; dropping notification");
            }
        }
    }
}

pub fn dispatch_intents<C: Clock>(
    controller: &mut CardFormController<C>,
    intents: Vec<Intent>,
    notifier: &mut ChannelNotifier,
) -> Vec<SaveResult> {
    let mut results = Vec::new();
    for intent in intents {
        let intent_name = intent.name();
        if let Some(result) = controller.handle(intent, notifier) {
            results.push(result);
        }
        tracing::debug!(intent = intent_name, mode = controller.mode().label(), "applied ui intent");
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_core::{ManualClock, DEFAULT_HINT_BANNER_DURATION};
    use crossbeam_channel::bounded;
    use shared::domain::{CardField, Mode};

    fn set(field: CardField, value: &str) -> Intent {
        Intent::SetField {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn save_outcome_reaches_the_ui_queue() {
        let (ui_tx, ui_rx) = bounded(8);
        let mut notifier = ChannelNotifier::new(ui_tx);
        let mut controller =
            CardFormController::with_clock(ManualClock::new(), DEFAULT_HINT_BANNER_DURATION);

        let results = dispatch_intents(
            &mut controller,
            vec![
                set(CardField::Name, "Ada"),
                set(CardField::Hobby, "Math"),
                set(CardField::Age, "30"),
                Intent::RequestSave,
            ],
            &mut notifier,
        );

        assert_eq!(results, vec![SaveResult::Accepted]);
        assert_eq!(controller.mode(), Mode::Locked);
        assert_eq!(
            ui_rx.try_recv().expect("notification"),
            UiEvent::Notify(Notification::saved())
        );
        assert!(ui_rx.try_recv().is_err());
    }

    #[test]
    fn full_queue_drops_notification_without_blocking() {
        let (ui_tx, ui_rx) = bounded(1);
        let mut notifier = ChannelNotifier::new(ui_tx);
        let mut controller =
            CardFormController::with_clock(ManualClock::new(), DEFAULT_HINT_BANNER_DURATION);

        let results = dispatch_intents(
            &mut controller,
            vec![Intent::RequestSave, Intent::RequestSave],
            &mut notifier,
        );

        assert_eq!(results.len(), 2);
        assert_eq!(ui_rx.len(), 1);
    }

    #[test]
    fn disconnected_queue_is_tolerated() {
        let (ui_tx, ui_rx) = bounded(1);
        drop(ui_rx);
        let mut notifier = ChannelNotifier::new(ui_tx);
        let mut controller =
            CardFormController::with_clock(ManualClock::new(), DEFAULT_HINT_BANNER_DURATION);

        let results = dispatch_intents(&mut controller, vec![Intent::RequestSave], &mut notifier);
        assert!(matches!(results[0], SaveResult::Rejected(_)));
    }
}
