//! Configuration loading for Stevedore
//!
//! Settings come from `~/.config/stevedore/config.toml` (or an explicit
//! path), with the API base URL overridable via the `STEVEDORE_API_URL`
//! environment variable and the `--api-url` CLI flag.

mod settings;
mod types;

pub use settings::{load_settings, API_URL_ENV};
pub use types::{ApiSettings, Settings, UiSettings};
