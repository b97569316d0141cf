use anyhow::{Context, Result};
use eframe::egui;
use megaphone::config::MegaphoneConfig;
use megaphone::ui::MegaphoneApp;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing with the built-in filter; the configured one
    // replaces it once the config file has been read.
    let env_filter = EnvFilter::try_from_default_env();
    let from_env = env_filter.is_ok();
    let bootstrap =
        env_filter.unwrap_or_else(|_| EnvFilter::new(MegaphoneConfig::default().log_filter));
    let (filter, filter_handle) = reload::Layer::new(bootstrap);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MegaphoneConfig::load_default().context("Failed to load configuration")?;

    if !from_env {
        apply_log_filter(&filter_handle, &config.log_filter)?;
    }

    info!("Starting Megaphone");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 400.0])
            .with_title("Megaphone"),
        ..Default::default()
    };

    eframe::run_native(
        "Megaphone",
        options,
        Box::new(move |cc| create_app(cc, &config)),
    )
    .map_err(|e| anyhow::anyhow!("Megaphone window failed: {e}"))
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
    config: &MegaphoneConfig,
) -> std::result::Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    let app = MegaphoneApp::new(cc, config)?;
    Ok(Box::new(app))
}

/// Swap the active log filter for `directives`
fn apply_log_filter<S>(handle: &reload::Handle<EnvFilter, S>, directives: &str) -> Result<()> {
    handle
        .reload(EnvFilter::new(directives))
        .context("Failed to apply configured log filter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_configured_filter_replaces_bootstrap() {
        let (filter, handle) = reload::Layer::new(EnvFilter::new("megaphone=info"));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "megaphone::config", Level::DEBUG));

            apply_log_filter(&handle, "megaphone=debug").unwrap();
            assert!(tracing::enabled!(target: "megaphone::config", Level::DEBUG));
        });
    }
}
