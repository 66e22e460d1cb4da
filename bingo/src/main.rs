use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Band Shirt Bingo")
        .with_inner_size(LogicalSize::new(1000, 900))
        .with_background_color((0x12, 0x12, 0x12, 0xff));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            DioxusConfig::default()
                .with_window(window)
                .with_background_color((0x12, 0x12, 0x12, 0xff)),
        )
        .launch(bingo::App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(bingo::App);
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    configure_logging();

    info!("Starting Band Shirt Bingo");
    launch();
}
