mod app;
mod appointment;
mod assets;
mod config;
mod error;
mod forms;
mod pets;
mod screens;
mod ui;
mod validation;

use std::io;
use std::sync::Arc;

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::assets::AssetId;
use crate::config::AppConfig;
use crate::screens::Route;

/// Entry point for PawTrack
fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paw_track=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("starting PawTrack");

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load config, using defaults");
        AppConfig::default()
    });

    let [width, height] = Route::Login.window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title(Route::Login.title())
            .with_icon(load_icon(&config)),
        ..Default::default()
    };

    let result = eframe::run_native(
        "PawTrack",
        native_options,
        Box::new(|_cc| Ok(Box::new(app::PawTrackApp::new(config)))),
    );
    if let Err(err) = &result {
        tracing::error!(error = %err, "application exited with an error");
    }
    result
}

/// Uses the logo as window icon, or a plain paw-coloured square without it
fn load_icon(config: &AppConfig) -> Arc<egui::IconData> {
    let path = config.asset_dir.join(AssetId::Logo.file_name());
    match assets::decode_image(&path) {
        Ok(image) => Arc::new(egui::IconData {
            rgba: image.as_raw().to_vec(),
            width: image.size[0] as u32,
            height: image.size[1] as u32,
        }),
        Err(err) => {
            tracing::debug!(error = %err, "no icon image");
            let side = 32;
            let rgba = (0..side * side)
                .flat_map(|_| [30, 41, 59, 255])
                .collect();
            Arc::new(egui::IconData {
                rgba,
                width: side,
                height: side,
            })
        }
    }
}
