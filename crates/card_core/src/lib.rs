//! Card form state machine: field edits, edit/lock mode, save validation and
//! the auto-hiding hint banner.

use std::time::{Duration, Instant};

use shared::{
    domain::{CardField, FormFields, Mode},
    protocol::{FormSnapshot, Intent, Notification},
};
use tracing::{debug, info};

pub mod clock;
pub mod hint_banner;
pub mod notifier;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use hint_banner::{HintBanner, DEFAULT_HINT_BANNER_DURATION};
pub use notifier::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveResult {
    Accepted,
    /// Blank fields in the order Name, Hobby, Age.
    Rejected(Vec<CardField>),
}

impl SaveResult {
    pub fn notification(&self) -> Notification {
        match self {
            SaveResult::Accepted => Notification::saved(),
            SaveResult::Rejected(missing) => Notification::missing(missing),
        }
    }
}

/// The hide deadline is plain data owned here, so dropping the controller leaves nothing to fire.
pub struct CardFormController<C: Clock = SystemClock> {
    fields: FormFields,
    mode: Mode,
    banner: HintBanner,
    clock: C,
}

impl CardFormController<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DEFAULT_HINT_BANNER_DURATION)
    }
}

impl Default for CardFormController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CardFormController<C> {
    pub fn with_clock(clock: C, hint_banner_duration: Duration) -> Self {
        Self {
            fields: FormFields::default(),
            mode: Mode::Editing,
            banner: HintBanner::new(hint_banner_duration),
            clock,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: CardField) -> &str {
        self.fields.get(field)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hint_banner_visible(&self) -> bool {
        self.banner.is_visible_at(self.clock.now())
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            mode: self.mode,
            hint_banner_visible: self.hint_banner_visible(),
        }
    }

    /// Applies `value` when editing and when the field's input rule accepts it.
    /// Anything else is ignored without an error.
    pub fn set_field(&mut self, field: CardField, value: &str) {
        if self.mode == Mode::Locked {
            debug!(%field, "ignored field edit while locked");
            return;
        }
        if self.fields.try_set(field, value) {
            debug!(%field, "field updated");
        } else {
            debug!(%field, "rejected non-digit input");
        }
    }

    /// Flips the mode without validation (the status chip).
    pub fn toggle_mode(&mut self) {
        let next = self.mode.toggled();
        self.transition(next);
    }

    pub fn request_save(&mut self) -> SaveResult {
        let missing = self.fields.missing();
        if !missing.is_empty() {
            info!(?missing, "save rejected");
            return SaveResult::Rejected(missing);
        }
        info!("save accepted");
        self.transition(Mode::Locked);
        SaveResult::Accepted
    }

    /// Re-enables editing; does nothing while already editing.
    pub fn request_edit(&mut self) {
        if self.mode == Mode::Editing {
            debug!("edit requested while already editing");
            return;
        }
        self.transition(Mode::Editing);
    }

    /// Routes an intent and forwards any save outcome to `notifier`.
    pub fn handle(&mut self, intent: Intent, notifier: &mut dyn Notifier) -> Option<SaveResult> {
        debug!(intent = intent.name(), "handling intent");
        match intent {
            Intent::SetField { field, value } => {
                self.set_field(field, &value);
                None
            }
            Intent::ToggleMode => {
                self.toggle_mode();
                None
            }
            Intent::RequestEdit => {
                self.request_edit();
                None
            }
            Intent::RequestSave => {
                let result = self.request_save();
                notifier.notify(result.notification());
                Some(result)
            }
        }
    }

    /// Services the hide timer. Returns `true` when the banner was hidden by this call.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let hidden = self.banner.fire_due(now);
        if hidden {
            info!("hint banner hidden");
        }
        hidden
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.banner.deadline()
    }

    pub fn time_until_deadline(&self) -> Option<Duration> {
        self.banner.remaining(self.clock.now())
    }

    fn transition(&mut self, next: Mode) {
        let previous = self.mode;
        if previous == next {
            return;
        }
        self.mode = next;
        debug!(from = previous.label(), to = next.label(), "mode changed");

        let now = self.clock.now();
        if self.banner.fire_due(now) {
            info!("hint banner hidden");
        }
        if previous == Mode::Editing && next == Mode::Locked && self.fields.is_complete() {
            if self.banner.show(now) {
                info!(duration_ms = self.banner.duration().as_millis() as u64, "hint banner shown");
            } else {
                debug!("hint banner already visible; keeping pending deadline");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
