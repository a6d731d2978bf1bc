//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Theme;
use crate::core::navigation::NavigationTiming;
use crate::core::profile::{Profile, Project, SocialLink};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub debounce_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub avatar_initials: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub github_user: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub debounce_ms: Option<u64>,
    pub cooldown_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub timing: NavigationTiming,
    pub profile: Profile,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from `~/.folio/config.toml`.
///
/// A missing default file is generated and `FolioConfig::default()` is
/// returned. A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<FolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"                 # "dark" or "light" (or FOLIO_THEME)

# [navigation]
# debounce_ms = 150              # Wheel quiet period before switching sections
# cooldown_ms = 500              # Lock after each section switch

# [profile]
# name = "Your Name"
# headline = "What you do"
# bio = "A short **markdown** introduction."
# avatar_initials = "YN"
# email = "you@example.com"      # Contact form recipient (or FOLIO_EMAIL)
# location = "City, Country"
# github_user = "your-handle"

# [[projects]]
# id = "alpha"
# title = "Project title"
# description = "What it does."
# link = "https://github.com/your-handle/project"

# [[socials]]
# name = "GitHub"
# url = "https://github.com/your-handle"
# key = "g"                      # Hotkey that opens the link
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| {
            env("FOLIO_THEME").and_then(|v| {
                let parsed = Theme::parse(&v);
                if parsed.is_none() {
                    warn!("Ignoring unknown FOLIO_THEME value {:?}", v);
                }
                parsed
            })
        })
        .or(config.general.theme)
        .unwrap_or_default();

    let defaults = NavigationTiming::default();
    let debounce = resolve_duration(
        "debounce",
        cli.debounce_ms,
        env("FOLIO_DEBOUNCE_MS"),
        config.navigation.debounce_ms,
        defaults.debounce,
    );
    let cooldown = resolve_duration(
        "cooldown",
        cli.cooldown_ms,
        env("FOLIO_COOLDOWN_MS"),
        config.navigation.cooldown_ms,
        defaults.cooldown,
    );

    let mut profile = resolve_profile(config);
    if let Some(email) = env("FOLIO_EMAIL") {
        profile.email = email;
    }

    ResolvedConfig {
        theme,
        timing: NavigationTiming { debounce, cooldown },
        profile,
    }
}

/// CLI → env → config → default. Zero is rejected: both timers must be positive.
fn resolve_duration(
    name: &str,
    cli: Option<u64>,
    env: Option<String>,
    file: Option<u64>,
    default: Duration,
) -> Duration {
    let env = env.and_then(|v| match v.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring invalid {} env value {:?}: {}", name, v, e);
            None
        }
    });

    match cli.or(env).or(file) {
        Some(0) => {
            warn!("{} must be positive, using default {:?}", name, default);
            default
        }
        Some(ms) => Duration::from_millis(ms),
        None => default,
    }
}

fn resolve_profile(config: &FolioConfig) -> Profile {
    let defaults = Profile::default();
    let p = &config.profile;

    Profile {
        name: p.name.clone().unwrap_or(defaults.name),
        headline: p.headline.clone().unwrap_or(defaults.headline),
        bio: p.bio.clone().unwrap_or(defaults.bio),
        avatar_initials: p.avatar_initials.clone().unwrap_or(defaults.avatar_initials),
        email: p.email.clone().unwrap_or(defaults.email),
        location: p.location.clone().unwrap_or(defaults.location),
        github_user: p.github_user.clone().unwrap_or(defaults.github_user),
        projects: if config.projects.is_empty() {
            defaults.projects
        } else {
            config.projects.clone()
        },
        socials: if config.socials.is_empty() {
            defaults.socials
        } else {
            config.socials.clone()
        },
    }
}
