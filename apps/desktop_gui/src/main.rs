use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::{load_settings, CardfolioSettings, ThemePreference};
use ui::CardfolioApp;

#[derive(Parser, Debug)]
#[command(name = "cardfolio", about = "Digital business card editor")]
struct StartupArgs {
    /// Config file to read instead of the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,
    #[arg(long)]
    hint_banner_ms: Option<u64>,
    #[arg(long)]
    toast_ms: Option<u64>,
}

impl StartupArgs {
    fn apply(&self, settings: &mut CardfolioSettings) {
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(ms) = self.hint_banner_ms {
            settings.hint_banner_ms = ms;
        }
        if let Some(ms) = self.toast_ms {
            settings.toast_ms = ms;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = StartupArgs::parse();
    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    args.apply(&mut settings);
    info!(?settings, "starting cardfolio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cardfolio")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cardfolio",
        options,
        Box::new(move |_cc| Ok(Box::new(CardfolioApp::new(&settings)))),
    )
    .map_err(|err| anyhow::anyhow!("window terminated with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_loaded_settings() {
        let args = StartupArgs::parse_from([
            "cardfolio",
            "--theme",
            "dark",
            "--hint-banner-ms",
            "1500",
        ]);
        let mut settings = CardfolioSettings::default();
        args.apply(&mut settings);

        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(settings.hint_banner_ms, 1500);
        assert_eq!(settings.toast_ms, 2000);
    }

    #[test]
    fn no_flags_leave_settings_untouched() {
        let args = StartupArgs::parse_from(["cardfolio"]);
        let mut settings = CardfolioSettings::default();
        args.apply(&mut settings);
        assert_eq!(settings, CardfolioSettings::default());
    }
}
