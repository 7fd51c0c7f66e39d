//! Card palettes and typography, handed explicitly to every render function.

use std::collections::BTreeMap;

use eframe::egui;

use crate::config::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: egui::Color32,
    pub secondary: egui::Color32,
    pub tertiary: egui::Color32,
    pub surface: egui::Color32,
    pub on_surface: egui::Color32,
    pub on_surface_variant: egui::Color32,
    pub outline: egui::Color32,
    pub gradient_top: egui::Color32,
    pub gradient_bottom: egui::Color32,
    pub warning: egui::Color32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub headline: f32,
    pub title: f32,
    pub body: f32,
    pub label: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline: 28.0,
            title: 20.0,
            body: 16.0,
            label: 13.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTheme {
    pub dark: bool,
    pub palette: Palette,
    pub typography: Typography,
    pub card_rounding: u8,
}

const PRIMARY_BLUE: egui::Color32 = egui::Color32::from_rgb(0x15, 0x65, 0xC0);
const SECONDARY_PINK: egui::Color32 = egui::Color32::from_rgb(0xD8, 0x1B, 0x60);
// Black at 30 % alpha; premultiplied and unmultiplied agree for black.
const OUTLINE: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 77);

impl CardTheme {
    pub fn light() -> Self {
        Self {
            dark: false,
            palette: Palette {
                primary: PRIMARY_BLUE,
                secondary: SECONDARY_PINK,
                tertiary: egui::Color32::from_rgb(0x7D, 0x52, 0x60),
                surface: egui::Color32::WHITE,
                on_surface: egui::Color32::BLACK,
                on_surface_variant: egui::Color32::from_rgb(0x88, 0x88, 0x88),
                outline: OUTLINE,
                gradient_top: egui::Color32::from_rgb(0xE0, 0xE0, 0xE0),
                gradient_bottom: egui::Color32::from_rgb(0xFF, 0xCD, 0xD2),
                warning: egui::Color32::from_rgb(0xB0, 0x3A, 0x2E),
            },
            typography: Typography::default(),
            card_rounding: 28,
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            palette: Palette {
                primary: PRIMARY_BLUE,
                secondary: SECONDARY_PINK,
                tertiary: egui::Color32::from_rgb(0xEF, 0xB8, 0xC8),
                surface: egui::Color32::from_rgb(0x1C, 0x1B, 0x1F),
                on_surface: egui::Color32::WHITE,
                on_surface_variant: egui::Color32::from_rgb(0xCC, 0xCC, 0xCC),
                outline: OUTLINE,
                gradient_top: egui::Color32::from_rgb(0xBB, 0xDE, 0xFB),
                gradient_bottom: egui::Color32::from_rgb(0x42, 0x42, 0x42),
                warning: egui::Color32::from_rgb(0xF2, 0xB8, 0xB5),
            },
            typography: Typography::default(),
            card_rounding: 28,
        }
    }

    /// `System` follows the theme egui reports for the window and falls back to light.
    pub fn resolve(preference: ThemePreference, system: Option<egui::Theme>) -> Self {
        match (preference, system) {
            (ThemePreference::Dark, _) | (ThemePreference::System, Some(egui::Theme::Dark)) => {
                Self::dark()
            }
            _ => Self::light(),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let palette = self.palette;
        visuals.override_text_color = Some(palette.on_surface);
        visuals.window_fill = palette.surface;
        visuals.extreme_bg_color = palette.surface;
        visuals.hyperlink_color = palette.primary;
        visuals.selection.bg_fill = palette.primary;
        visuals.widgets.active.bg_fill = palette.primary;
        visuals.widgets.hovered.bg_fill = palette.primary.gamma_multiply(0.85);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.outline);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.outline);
        visuals.window_corner_radius = egui::CornerRadius::same(self.card_rounding);
        visuals
    }

    pub fn text_styles(&self) -> BTreeMap<egui::TextStyle, egui::FontId> {
        let mut styles = egui::Style::default().text_styles;
        styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(self.typography.headline),
        );
        styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(self.typography.body),
        );
        styles.insert(
            egui::TextStyle::Button,
            egui::FontId::proportional(self.typography.body),
        );
        styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(self.typography.label),
        );
        styles
    }

    /// Outline for secondary actions such as Edit.
    pub fn accent_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(1.0, self.palette.secondary)
    }

    /// Toast background for a notification of the given kind.
    pub fn toast_fill(&self, kind: shared::protocol::NotificationKind) -> egui::Color32 {
        match kind {
            shared::protocol::NotificationKind::Success => self.palette.primary,
            shared::protocol::NotificationKind::Warning => self.palette.warning,
        }
    }
}
