// state.rs
// AppState and environment-driven settings.

use anyhow::{Context, Result, bail};
use std::{env, path::PathBuf, str::FromStr};

use crate::totp::{DEFAULT_DIGITS, DEFAULT_PERIOD};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const MAX_DIGITS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub totp_period: u64,
    pub digits: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            totp_period: DEFAULT_PERIOD,
            digits: DEFAULT_DIGITS,
        }
    }
}

impl Settings {
    /// Reads HOST, PORT, PUBLIC_DIR, TOTP_PERIOD and OTP_DIGITS, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Settings::default();
        let settings = Settings {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            totp_period: parse_var("TOTP_PERIOD")?.unwrap_or(defaults.totp_period),
            digits: parse_var("OTP_DIGITS")?.unwrap_or(defaults.digits),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.totp_period == 0 {
            bail!("TOTP_PERIOD must be greater than zero");
        }
        if !(1..=MAX_DIGITS).contains(&self.digits) {
            bail!("OTP_DIGITS must be between 1 and {MAX_DIGITS}, got {}", self.digits);
        }
        Ok(())
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

pub fn init_state() -> Result<AppState> {
    Ok(AppState::new(Settings::from_env()?))
}
