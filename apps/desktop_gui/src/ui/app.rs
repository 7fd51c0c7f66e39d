use std::time::Duration;

use card_core::{CardFormController, Clock, SystemClock};
use crossbeam_channel::{bounded, Receiver};
use eframe::egui;
use shared::protocol::Intent;
use tracing::info;

use crate::config::{CardfolioSettings, ThemePreference};
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_intents, ChannelNotifier};
use crate::controller::toasts::ToastQueue;
use crate::ui::card::{paint_gradient, show_card, show_hint_banner, show_title, show_toasts, CardView};
use crate::ui::theme::CardTheme;

const UI_EVENT_QUEUE_CAPACITY: usize = 64;
const CARD_MAX_WIDTH: f32 = 560.0;

pub struct CardfolioApp<C: Clock + Clone = SystemClock> {
    clock: C,
    controller: CardFormController<C>,
    notifier: ChannelNotifier,
    ui_rx: Receiver<UiEvent>,
    toasts: ToastQueue,

    theme_preference: ThemePreference,
    theme: CardTheme,
    applied_theme: Option<CardTheme>,
}

impl CardfolioApp<SystemClock> {
    pub fn new(settings: &CardfolioSettings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock + Clone> CardfolioApp<C> {
    pub fn with_clock(settings: &CardfolioSettings, clock: C) -> Self {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        let theme = CardTheme::resolve(settings.theme, None);
        Self {
            controller: CardFormController::with_clock(
                clock.clone(),
                Duration::from_millis(settings.hint_banner_ms),
            ),
            clock,
            notifier: ChannelNotifier::new(ui_tx),
            ui_rx,
            toasts: ToastQueue::new(Duration::from_millis(settings.toast_ms)),
            theme_preference: settings.theme,
            theme,
            applied_theme: None,
        }
    }

    /// Fires due timers: the hint banner and toast expiry.
    fn service_timers(&mut self) {
        self.controller.tick();
        let expired = self.toasts.expire(self.clock.now());
        if expired > 0 {
            tracing::debug!(expired, "toasts expired");
        }
    }

    fn apply_intents(&mut self, intents: Vec<Intent>) {
        if intents.is_empty() {
            return;
        }
        dispatch_intents(&mut self.controller, intents, &mut self.notifier);
        self.process_ui_events();
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Notify(notification) => {
                    info!(message = %notification.message, "showing notification");
                    self.toasts.push(notification, self.clock.now());
                }
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let theme = CardTheme::resolve(self.theme_preference, ctx.system_theme());
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_theme(if theme.dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_visuals(theme.visuals());
        ctx.style_mut(|style| style.text_styles = theme.text_styles());
        self.theme = theme;
        self.applied_theme = Some(theme);
    }

    fn next_repaint_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        [self.controller.next_deadline(), self.toasts.next_deadline()]
            .into_iter()
            .flatten()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn show_screen(&self, ctx: &egui::Context) -> Vec<Intent> {
        let theme = self.theme;
        let view = CardView {
            fields: self.controller.fields(),
            mode: self.controller.mode(),
        };
        let hint_banner_visible = self.controller.hint_banner_visible();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                paint_gradient(
                    ui.painter(),
                    rect,
                    theme.palette.gradient_top,
                    theme.palette.gradient_bottom,
                );

                ui.vertical_centered(|ui| {
                    show_title(ui, &theme);
                    let width = ui.available_width().min(CARD_MAX_WIDTH) - 32.0;
                    ui.allocate_ui(egui::vec2(width, ui.available_height()), |ui| {
                        let intents = show_card(ui, &theme, &view);
                        if hint_banner_visible {
                            ui.add_space(16.0);
                            show_hint_banner(ui, &theme);
                        }
                        intents
                    })
                    .inner
                })
                .inner
            })
            .inner
    }

    fn run_frame(&mut self, ctx: &egui::Context) {
        self.service_timers();
        self.apply_theme_if_needed(ctx);

        let intents = self.show_screen(ctx);
        if !intents.is_empty() {
            self.apply_intents(intents);
            ctx.request_repaint();
        }

        show_toasts(ctx, &self.theme, &self.toasts);

        if let Some(delay) = self.next_repaint_in() {
            ctx.request_repaint_after(delay);
        }
    }
}

impl<C: Clock + Clone> eframe::App for CardfolioApp<C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
