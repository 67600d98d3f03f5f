use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

use crate::config::ControlScheme;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "skyward-client")]
#[command(about = "Pointer-steered space flight prototype", long_about = None)]
pub struct Args {
    /// Flight config (TOML). Defaults are used when the file is missing.
    #[arg(long, default_value = "flight.toml")]
    pub config: PathBuf,
    /// Run without window/rendering
    #[arg(long, default_value_t = false)]
    pub headless: bool,
    /// Start in flight instead of the main menu
    #[arg(long, default_value_t = false)]
    pub skip_menu: bool,
    /// Override the control scheme from the config file
    #[arg(long, value_enum)]
    pub scheme: Option<ControlScheme>,
    /// Screen width for headless runs (px)
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,
    /// Screen height for headless runs (px)
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: PathBuf::from("flight.toml"),
            headless: false,
            skip_menu: false,
            scheme: None,
            width: 1280.0,
            height: 720.0,
        }
    }
}
