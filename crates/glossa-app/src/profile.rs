use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use glossa_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profiles stored as `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<config_dir>/glossa`
    pub fn user() -> anyhow::Result<Self> {
        let config_dir = dirs::config_dir().context("No config directory on this platform")?;
        Ok(Self::new(config_dir.join("glossa")))
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Create the profiles folder and the main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path(MAIN_PROFILE);
        if !main_profile.exists() {
            let profile = Profile {
                name: MAIN_PROFILE.into(),
                value: Config::default(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a profile by name, falling back to main, then to defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path(MAIN_PROFILE);
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::default())
        }
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Profile named by `GLOSSA_PROFILE` (default main), with env overrides on top
pub fn load_config() -> anyhow::Result<Config> {
    let name = std::env::var("GLOSSA_PROFILE").unwrap_or_else(|_| MAIN_PROFILE.to_string());
    let store = ProfileStore::user()?;
    store.init()?;

    let mut config = store.load(&name)?;
    config.apply_env();
    Ok(config)
}
