//! Configuration schema types for the companion.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the stock frog.

use froggy_common::{Color, ConfigError, Reminder, SpeechStyle};
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Chat Config
// =============================================================================

/// Local LLM chat service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the Ollama-compatible server.
    pub endpoint: String,
    pub model: String,
    /// System instruction sent with every question.
    pub persona: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".into(),
            model: "phi3".into(),
            persona: "You are a friendly chatbot who always responds in the style of a frog"
                .into(),
            timeout_secs: 60,
        }
    }
}

// =============================================================================
// Speech Config
// =============================================================================

/// Speech display timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// How long facts and other untimed messages stay visible.
    pub default_duration_ms: u64,
    /// Reading speed used to time chat replies (valid range: 30-1000).
    pub reading_wpm: u32,
    /// Shown when a question arrives while another is still pending.
    pub wait_message: String,
    pub wait_duration_ms: u64,
    /// How long reminder text stays visible.
    pub reminder_duration_ms: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 5000,
            reading_wpm: 130,
            wait_message: "Wait... I'm thinking...".into(),
            wait_duration_ms: 2000,
            reminder_duration_ms: 2000,
        }
    }
}

// =============================================================================
// Style Config
// =============================================================================

/// Speech panel styling. Colors accept `#rrggbb[aa]` or `rgba(r,g,b,a)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub text: String,
    pub panel: String,
    pub border: String,
    /// Font size in points (valid range: 8-72).
    pub font_size: u32,
    /// Corner radius in pixels (valid range: 0-40).
    pub border_radius: u32,
    /// Padding in pixels (valid range: 0-40).
    pub padding: u32,
    /// Border width in pixels (valid range: 0-10).
    pub border_width: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text: "#ffffff".into(),
            panel: "rgba(0,0,0,180)".into(),
            border: "#ffffff".into(),
            font_size: 15,
            border_radius: 15,
            padding: 10,
            border_width: 2,
        }
    }
}

impl StyleConfig {
    /// Resolve the string colors into the immutable style value handed to
    /// the display surface.
    pub fn resolve(&self) -> Result<SpeechStyle, ConfigError> {
        let parse = |name: &str, value: &str| {
            Color::parse(value).ok_or_else(|| {
                ConfigError::ValidationError(format!("style.{name} = {value:?} is not a color"))
            })
        };
        Ok(SpeechStyle {
            text: parse("text", &self.text)?,
            panel: parse("panel", &self.panel)?,
            border: parse("border", &self.border)?,
            font_size: self.font_size,
            border_radius: self.border_radius,
            padding: self.padding,
            border_width: self.border_width,
        })
    }
}

// =============================================================================
// Companion Config
// =============================================================================

/// The companion's body: name, image asset, prompt input metadata, and the
/// initial window position the shell docks it at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub name: String,
    /// Path to the bundled companion image.
    pub image: String,
    pub prompt_placeholder: String,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            name: "Froggy".into(),
            image: "assets/frog.png".into(),
            prompt_placeholder: "Ask for anything".into(),
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Default tracing filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "froggy=debug",
            LogLevel::Info => "froggy=info",
            LogLevel::Warning => "froggy=warn",
            LogLevel::Error => "froggy=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

// =============================================================================
// Root Config
// =============================================================================

fn default_reminders() -> Vec<Reminder> {
    vec![Reminder::new("It's time to take a break!", 3_600_000)]
}

/// Root configuration for the companion.
///
/// All options have defaults matching the stock frog. Only override what
/// you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FroggyConfig {
    pub chat: ChatConfig,
    pub speech: SpeechConfig,
    pub style: StyleConfig,
    pub companion: CompanionConfig,
    pub reminders: Vec<Reminder>,
    pub logging: LoggingConfig,
}

impl Default for FroggyConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            speech: SpeechConfig::default(),
            style: StyleConfig::default(),
            companion: CompanionConfig::default(),
            reminders: default_reminders(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
