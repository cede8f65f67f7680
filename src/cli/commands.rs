//! Subcommand handlers for config actions.

use std::io::Write;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};
use crate::error::BannerError;

/// Handle config subcommand actions.
///
/// `path` overrides the default config location, as `--config` does for
/// the banner itself.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    path: Option<&Path>,
    out: &mut W,
) -> Result<(), BannerError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path.as_path()))?;
            let anim = &config.animation;
            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Frame delay: {} ms", anim.frame_delay_ms)?;
            writeln!(out, "  Sweep pause: {} ms", anim.sweep_pause_ms)?;
            writeln!(out, "  Intro delay: {} ms", anim.intro_delay_ms)?;
            writeln!(out, "  Wave length: {}", anim.wave_length)?;
            writeln!(out, "  Max amplitude: {}", anim.max_amplitude)?;
            writeln!(out, "  Border: {}", config.banner.border_char)?;
            writeln!(
                out,
                "  Default color: {}",
                config.color.default.map(|c| c.name()).unwrap_or("none")
            )?;
            writeln!(out)?;

            if config_path.exists() {
                writeln!(out, "Config file: {} (exists)", config_path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", config_path.display())?;
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                writeln!(out, "Config file already exists: {}", config_path.display())?;
                writeln!(out, "Use 'ascii-banner config show' to view current settings.")?;
                return Ok(());
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)?;
            log::info!("wrote default config to {}", config_path.display());

            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}
