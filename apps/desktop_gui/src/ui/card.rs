//! Card widgets. Rendering never mutates form state; it returns the intents the user produced.

use eframe::egui;
use shared::{
    domain::{is_blank, CardField, FormFields, Mode},
    protocol::Intent,
};

use crate::{controller::toasts::ToastQueue, ui::theme::CardTheme};

pub const APP_TITLE: &str = "Cardfolio";
pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const HOBBY_PLACEHOLDER: &str = "Your Hobby";
pub const AGE_WARNING: &str = "Age must be a number";
pub const HINT_BANNER_TEXT: &str = "Card saved. Tap Edit to make changes.";

const AVATAR_SIZE: f32 = 84.0;

#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub fields: &'a FormFields,
    pub mode: Mode,
}

pub fn display_or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if is_blank(value) {
        placeholder
    } else {
        value
    }
}

/// Up to two uppercase initials; empty when the name is blank.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn field_icon(field: CardField) -> &'static str {
    match field {
        CardField::Name => "👤",
        CardField::Hobby => "❤",
        CardField::Age => "ℹ",
    }
}

fn mode_chip(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::Editing => ("✏", mode.label()),
        Mode::Locked => ("🔒", mode.label()),
    }
}

pub fn paint_gradient(
    painter: &egui::Painter,
    rect: egui::Rect,
    top: egui::Color32,
    bottom: egui::Color32,
) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

pub fn show_title(ui: &mut egui::Ui, theme: &CardTheme) {
    ui.add_space(16.0);
    ui.label(
        egui::RichText::new(APP_TITLE)
            .size(theme.typography.headline)
            .strong()
            .color(theme.palette.on_surface),
    );
    ui.add_space(24.0);
}

pub fn show_card(ui: &mut egui::Ui, theme: &CardTheme, view: &CardView<'_>) -> Vec<Intent> {
    let mut intents = Vec::new();
    let palette = theme.palette;

    egui::Frame::new()
        .fill(palette.surface)
        .corner_radius(egui::CornerRadius::same(theme.card_rounding))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: egui::Color32::from_black_alpha(60),
        })
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(20, 16))
                .show(ui, |ui| show_header(ui, theme, view, &mut intents));

            let (divider, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter()
                .hline(divider.x_range(), divider.center().y, egui::Stroke::new(1.0, palette.outline));

            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(20, 16))
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 12.0;
                    for field in CardField::ALL {
                        show_field(ui, theme, view, field, &mut intents);
                    }
                    ui.add_space(4.0);
                    show_actions(ui, theme, view, &mut intents);
                });
        });

    intents
}

fn show_header(ui: &mut egui::Ui, theme: &CardTheme, view: &CardView<'_>, intents: &mut Vec<Intent>) {
    let palette = theme.palette;
    ui.horizontal(|ui| {
        show_avatar(ui, theme, &view.fields.name);
        ui.add_space(16.0);

        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(display_or_placeholder(&view.fields.name, NAME_PLACEHOLDER))
                    .size(theme.typography.title)
                    .color(palette.on_surface),
            );
            ui.label(
                egui::RichText::new(display_or_placeholder(&view.fields.hobby, HOBBY_PLACEHOLDER))
                    .size(theme.typography.body)
                    .color(palette.on_surface_variant),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, label) = mode_chip(view.mode);
            let chip = egui::Button::new(
                egui::RichText::new(format!("{icon} {label}"))
                    .size(theme.typography.label)
                    .color(palette.on_surface),
            )
            .stroke(egui::Stroke::new(1.0, palette.outline))
            .fill(egui::Color32::TRANSPARENT);
            if ui.add(chip).clicked() {
                intents.push(Intent::ToggleMode);
            }
        });
    });
}

fn show_avatar(ui: &mut egui::Ui, theme: &CardTheme, name: &str) {
    let palette = theme.palette;
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle(
        rect.center(),
        AVATAR_SIZE / 2.0,
        palette.tertiary.gamma_multiply(0.35),
        egui::Stroke::new(1.0, palette.outline),
    );
    let initials = initials(name);
    let text = if initials.is_empty() {
        field_icon(CardField::Name).to_string()
    } else {
        initials
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(theme.typography.headline),
        palette.on_surface,
    );
}

fn show_field(
    ui: &mut egui::Ui,
    theme: &CardTheme,
    view: &CardView<'_>,
    field: CardField,
    intents: &mut Vec<Intent>,
) {
    let palette = theme.palette;
    let editable = view.mode.is_editing();

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 4.0;
        ui.label(
            egui::RichText::new(format!("{} {}", field_icon(field), field.label()))
                .size(theme.typography.label)
                .color(palette.on_surface_variant),
        );

        let mut buffer = view.fields.get(field).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .id_salt(("card_field", field.label()))
                .hint_text(field.label())
                .interactive(editable)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            intents.push(Intent::SetField {
                field,
                value: buffer,
            });
        }

        if field == CardField::Age && editable {
            ui.label(
                egui::RichText::new(AGE_WARNING)
                    .size(theme.typography.label)
                    .color(palette.on_surface_variant),
            );
        }
    });
}

fn show_actions(ui: &mut egui::Ui, theme: &CardTheme, view: &CardView<'_>, intents: &mut Vec<Intent>) {
    let editing = view.mode.is_editing();
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let save = egui::Button::new(egui::RichText::new("✔ Save").color(egui::Color32::WHITE))
            .fill(theme.palette.primary);
        if ui.add_enabled(editing, save).clicked() {
            intents.push(Intent::RequestSave);
        }
        ui.add_space(8.0);
        let edit = egui::Button::new("✏ Edit")
            .stroke(theme.accent_stroke())
            .fill(egui::Color32::TRANSPARENT);
        if ui.add_enabled(!editing, edit).clicked() {
            intents.push(Intent::RequestEdit);
        }
    });
}

pub fn show_hint_banner(ui: &mut egui::Ui, theme: &CardTheme) {
    egui::Frame::new()
        .fill(theme.palette.primary.gamma_multiply(0.18))
        .stroke(egui::Stroke::new(1.0, theme.palette.primary))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("ℹ {HINT_BANNER_TEXT}"))
                    .size(theme.typography.body)
                    .color(theme.palette.on_surface),
            );
        });
}

pub fn show_toasts(ctx: &egui::Context, theme: &CardTheme, toasts: &ToastQueue) {
    if toasts.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("cardfolio_toasts"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                egui::Frame::new()
                    .fill(theme.toast_fill(toast.notification.kind))
                    .corner_radius(egui::CornerRadius::same(16))
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&toast.notification.message)
                                .color(egui::Color32::WHITE),
                        );
                    });
                ui.add_space(6.0);
            }
        });
}
