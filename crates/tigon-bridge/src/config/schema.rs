use std::collections::HashSet;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use tigon_core::error::{Result, TigonError};
use tigon_core::protocol::BRIDGE_CHANNEL;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TigonConfig {
    pub version: u32,

    #[serde(default)]
    pub view: ViewSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for TigonConfig {
    fn default() -> Self {
        Self {
            version: 1,
            view: ViewSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl TigonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TigonError::UnsupportedVersion);
        }

        self.view.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSection {
    #[serde(default = "default_allows_inline_media_playback")]
    pub allows_inline_media_playback: bool,

    /// Extra channels routed through the bridge dispatcher; their messages
    /// reach `MessageHandler::on_unrecognized_message`.
    #[serde(default)]
    pub passthrough_channels: Vec<String>,
}

impl Default for ViewSection {
    fn default() -> Self {
        Self {
            allows_inline_media_playback: default_allows_inline_media_playback(),
            passthrough_channels: Vec::new(),
        }
    }
}

impl ViewSection {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ch in &self.passthrough_channels {
            if ch.trim().is_empty() {
                return Err(TigonError::BadConfig(
                    "view.passthrough_channels must not contain empty names".into(),
                ));
            }
            if ch == BRIDGE_CHANNEL {
                return Err(TigonError::BadConfig(format!(
                    "view.passthrough_channels must not contain the bridge channel \"{BRIDGE_CHANNEL}\""
                )));
            }
            if !seen.insert(ch.as_str()) {
                return Err(TigonError::BadConfig(format!(
                    "view.passthrough_channels lists \"{ch}\" twice"
                )));
            }
        }
        Ok(())
    }
}

fn default_allows_inline_media_playback() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LoggingSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(TigonError::BadConfig("logging.filter must not be empty".into()));
        }
        EnvFilter::try_new(&self.filter)
            .map_err(|e| TigonError::BadConfig(format!("logging.filter is invalid: {e}")))?;
        Ok(())
    }
}

fn default_filter() -> String {
    "info".into()
}
