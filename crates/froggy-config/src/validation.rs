//! Full configuration validation.
//!
//! Validates numeric ranges, color formats, and reminder entries,
//! collecting all errors into one message.

use crate::schema::FroggyConfig;
use froggy_common::{Color, ConfigError};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FroggyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Chat constraints
    if config.chat.endpoint.is_empty() {
        errors.push("chat.endpoint must not be empty".into());
    } else if !config.chat.endpoint.starts_with("http") {
        errors.push(format!(
            "chat.endpoint = {:?} must be an http(s) URL",
            config.chat.endpoint
        ));
    }
    if config.chat.model.is_empty() {
        errors.push("chat.model must not be empty".into());
    }
    validate_range(&mut errors, "chat.timeout_secs", config.chat.timeout_secs, 1, 600);

    // Speech timing constraints
    validate_range(
        &mut errors,
        "speech.reading_wpm",
        u64::from(config.speech.reading_wpm),
        30,
        1000,
    );
    validate_range(
        &mut errors,
        "speech.default_duration_ms",
        config.speech.default_duration_ms,
        100,
        600_000,
    );
    validate_range(
        &mut errors,
        "speech.wait_duration_ms",
        config.speech.wait_duration_ms,
        100,
        60_000,
    );
    validate_range(
        &mut errors,
        "speech.reminder_duration_ms",
        config.speech.reminder_duration_ms,
        100,
        600_000,
    );
    if config.speech.wait_message.is_empty() {
        errors.push("speech.wait_message must not be empty".into());
    }

    // Style constraints
    validate_color(&mut errors, "style.text", &config.style.text);
    validate_color(&mut errors, "style.panel", &config.style.panel);
    validate_color(&mut errors, "style.border", &config.style.border);
    validate_range(&mut errors, "style.font_size", u64::from(config.style.font_size), 8, 72);
    validate_range(
        &mut errors,
        "style.border_radius",
        u64::from(config.style.border_radius),
        0,
        40,
    );
    validate_range(&mut errors, "style.padding", u64::from(config.style.padding), 0, 40);
    validate_range(
        &mut errors,
        "style.border_width",
        u64::from(config.style.border_width),
        0,
        10,
    );

    // Companion constraints
    if config.companion.image.is_empty() {
        errors.push("companion.image must not be empty".into());
    }

    // Reminder constraints
    for (i, reminder) in config.reminders.iter().enumerate() {
        if reminder.text.is_empty() {
            errors.push(format!("reminders[{i}].text must not be empty"));
        }
        if reminder.interval_ms == 0 {
            errors.push(format!("reminders[{i}].interval_ms must be greater than zero"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::parse(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a color"));
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
