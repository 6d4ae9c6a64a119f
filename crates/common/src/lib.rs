use std::{path::PathBuf, sync::LazyLock};

pub mod aliases;
pub mod config;
pub mod launch;
pub mod resolve;
pub mod spotify;

pub use config::{Config, Workspace, load_config, save_config};
pub use launch::{Dispatcher, Launcher, SystemLauncher};

pub static CONFIG_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    if cfg!(debug_assertions) {
        return PathBuf::from("test").join("Sprout_config.json");
    }

    dirs::home_dir()
        .expect("Failed to get home dir.")
        .join("Sprout_config.json")
});
