//! Prarthana Desktop Application
//!
//! A desktop library of Hindi prayers with live search and favorites.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("prarthana=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting Prarthana...");

    dioxus::launch(app::App);
}
