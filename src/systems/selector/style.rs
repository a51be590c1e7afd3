//! Presentation settings for a selector and their JSON form.
//!
//! A host either edits [`SelectorStyle`] directly or loads a preset with
//! [`SelectorStyle::from_json`]. The panel copies what it needs when an
//! animation starts, so edits never reach an animation already running.
use std::{fmt, time::Duration};

use bevy::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::systems::colors::{DEFAULT_TEXT_COLOR, GRAY, LIGHT_GRAY};

const DEFAULT_STYLE_JSON: &str = include_str!("content/default_style.json");

static DEFAULT_STYLE: Lazy<Result<SelectorStyle, StyleConfigError>> =
    Lazy::new(|| SelectorStyle::from_json(DEFAULT_STYLE_JSON));

#[derive(Component, Clone, Debug, PartialEq)]
pub struct SelectorStyle {
    pub font: Handle<Font>,
    pub font_size: f32,
    /// Label color on the trigger.
    pub text_color: Color,
    /// Label color on the options inside the panel.
    pub expanded_text_color: Color,
    pub corner_radius: f32,
    pub background_color: Color,
    pub expanded_background_color: Color,
    /// Highlight behind a pressed trigger or option.
    pub selection_color: Color,
    /// Inset applied on every side of an image.
    pub image_padding: f32,
    pub min_option_extent: f32,
    pub animation_duration: Duration,
    pub auto_hide: bool,
}

impl SelectorStyle {
    pub fn from_json(json: &str) -> Result<Self, StyleConfigError> {
        let config: StyleConfig = serde_json::from_str(json).map_err(StyleConfigError::Parse)?;
        config.into_style()
    }

    fn fallback() -> Self {
        Self {
            font: Handle::default(),
            font_size: 15.0,
            text_color: DEFAULT_TEXT_COLOR,
            expanded_text_color: DEFAULT_TEXT_COLOR,
            corner_radius: 0.0,
            background_color: LIGHT_GRAY,
            expanded_background_color: LIGHT_GRAY,
            selection_color: GRAY,
            image_padding: 6.0,
            min_option_extent: 60.0,
            animation_duration: Duration::from_millis(275),
            auto_hide: true,
        }
    }

    pub fn text_font(&self) -> TextFont {
        TextFont {
            font: self.font.clone(),
            font_size: self.font_size,
            ..default()
        }
    }
}

impl Default for SelectorStyle {
    fn default() -> Self {
        match DEFAULT_STYLE.as_ref() {
            Ok(style) => style.clone(),
            Err(error) => {
                warn!("failed to load default selector style: {error}; using safe defaults");
                Self::fallback()
            }
        }
    }
}

#[derive(Debug)]
pub enum StyleConfigError {
    Parse(serde_json::Error),
    InvalidColor { field: &'static str, value: String },
    InvalidDuration(f32),
}

impl fmt::Display for StyleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "failed to parse selector style: {error}"),
            Self::InvalidColor { field, value } => {
                write!(f, "`{field}` is not a hex color: `{value}`")
            }
            Self::InvalidDuration(secs) => {
                write!(f, "animation duration must be finite and non-negative, got {secs}")
            }
        }
    }
}

impl std::error::Error for StyleConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct StyleConfig {
    #[serde(default = "default_font_size")]
    font_size: f32,
    #[serde(default = "default_text_color")]
    text_color: String,
    #[serde(default = "default_text_color")]
    expanded_text_color: String,
    #[serde(default)]
    corner_radius: f32,
    #[serde(default = "default_background_color")]
    background_color: String,
    #[serde(default = "default_background_color")]
    expanded_background_color: String,
    #[serde(default = "default_selection_color")]
    selection_color: String,
    #[serde(default = "default_image_padding")]
    image_padding: f32,
    #[serde(default = "default_min_option_extent")]
    min_option_extent: f32,
    #[serde(default = "default_animation_duration_secs")]
    animation_duration_secs: f32,
    #[serde(default = "default_auto_hide")]
    auto_hide: bool,
}

impl StyleConfig {
    fn into_style(self) -> Result<SelectorStyle, StyleConfigError> {
        let secs = self.animation_duration_secs;
        let animation_duration = if secs.is_finite() && secs >= 0.0 {
            Duration::from_secs_f32(secs)
        } else {
            return Err(StyleConfigError::InvalidDuration(secs));
        };

        Ok(SelectorStyle {
            font: Handle::default(),
            font_size: self.font_size,
            text_color: parse_color("text_color", &self.text_color)?,
            expanded_text_color: parse_color("expanded_text_color", &self.expanded_text_color)?,
            corner_radius: self.corner_radius,
            background_color: parse_color("background_color", &self.background_color)?,
            expanded_background_color: parse_color(
                "expanded_background_color",
                &self.expanded_background_color,
            )?,
            selection_color: parse_color("selection_color", &self.selection_color)?,
            image_padding: self.image_padding.max(0.0),
            min_option_extent: self.min_option_extent.max(0.0),
            animation_duration,
            auto_hide: self.auto_hide,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, StyleConfigError> {
    Srgba::hex(value)
        .map(Color::from)
        .map_err(|_| StyleConfigError::InvalidColor {
            field,
            value: value.to_string(),
        })
}

fn default_font_size() -> f32 {
    15.0
}

fn default_text_color() -> String {
    String::from("#FFFFFF")
}

fn default_background_color() -> String {
    String::from("#AAAAAA")
}

fn default_selection_color() -> String {
    String::from("#808080")
}

fn default_image_padding() -> f32 {
    6.0
}

fn default_min_option_extent() -> f32 {
    60.0
}

fn default_animation_duration_secs() -> f32 {
    0.275
}

fn default_auto_hide() -> bool {
    true
}
