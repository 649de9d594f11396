//! Občine viewer — main entry point.
//!
//! A Dioxus desktop application presenting a searchable, filterable
//! catalogue of Slovenian municipalities.
//!
//! Usage:
//!   obcine-viewer --data-url http://localhost:8080

use clap::Parser;

use obcine_viewer::app::{App, DATA_URL};
use obcine_viewer::theme;

/// Design tokens (loaded from assets/themes.css at compile time)
const THEME_CSS: &str = include_str!("../assets/themes.css");

/// Component CSS (loaded from assets/style.css at compile time)
const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "obcine-viewer")]
#[command(about = "Browse Slovenian municipalities by name and province")]
struct Args {
    /// Base URL serving municipalities-data.json and the emblem images
    #[arg(short, long, default_value = "http://localhost:8080")]
    data_url: String,

    /// Initial theme (dark or light)
    #[arg(short, long, default_value = "dark")]
    theme: String,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    // Store the base URL for the app and card components
    DATA_URL.set(args.data_url).ok();

    // Set initial theme
    if args.theme == "light" {
        *theme::CURRENT_THEME.write() = theme::Theme::Light;
    }

    // Launch the desktop app with embedded CSS
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title("Slovenske občine")
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_resizable(true),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    THEME_CSS, STYLE_CSS
                )),
        )
        .launch(App);
}
