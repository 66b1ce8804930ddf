use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dextrack_lib::{Settings, settings_path};

use crate::error::CliError;

/// Show the effective settings (file plus environment overrides).
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    log::info!(
        "{} {}",
        "Settings:".if_supports_color(Stdout, |t| t.bold()),
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");
    for line in settings.to_toml_string()?.lines() {
        log::info!("  {line}");
    }
    log::info!("");
    log::info!("  Data directory: {}", settings.data_dir().display());
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
