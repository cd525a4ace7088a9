use crate::foundation::error::{WordcycleError, WordcycleResult};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 500.0;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: f64 = 150.0;
/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 50.0;
/// Default seconds each word is on screen.
pub const DEFAULT_DURATION_PER_WORD: f64 = 2.0;
/// Default CSS font family list.
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman, serif";
/// Default fill for emphasized letters.
pub const DEFAULT_INK_COLOR: &str = "#000000";
/// Default fill for the rest of the word.
pub const DEFAULT_MUTED_COLOR: &str = "#aaaaaa";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Partially specified generator options, as supplied by a caller.
///
/// Missing fields, numeric zero and empty strings all mean "use the default".
pub struct AnimationOptions {
    /// Canvas width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Canvas height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Seconds each word is on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_per_word: Option<f64>,
    /// CSS font family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Fill for emphasized letters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink_color: Option<String>,
    /// Fill for the rest of the word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_color: Option<String>,
}

impl AnimationOptions {
    /// Parse options from a JSON object.
    pub fn from_json(s: &str) -> WordcycleResult<Self> {
        serde_json::from_str(s).map_err(|e| WordcycleError::serde(e.to_string()))
    }

    /// Set the canvas width.
    pub fn width(mut self, px: f64) -> Self {
        self.width = Some(px);
        self
    }

    /// Set the canvas height.
    pub fn height(mut self, px: f64) -> Self {
        self.height = Some(px);
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Set the per-word display duration.
    pub fn duration_per_word(mut self, secs: f64) -> Self {
        self.duration_per_word = Some(secs);
        self
    }

    /// Set the font family list.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the emphasized-letter fill.
    pub fn ink_color(mut self, color: impl Into<String>) -> Self {
        self.ink_color = Some(color.into());
        self
    }

    /// Set the plain-text fill.
    pub fn muted_color(mut self, color: impl Into<String>) -> Self {
        self.muted_color = Some(color.into());
        self
    }

    /// Apply defaults and validate.
    pub fn resolve(&self) -> WordcycleResult<AnimationConfig> {
        let config = AnimationConfig {
            width: number_or_default("width", self.width, DEFAULT_WIDTH)?,
            height: number_or_default("height", self.height, DEFAULT_HEIGHT)?,
            font_size: number_or_default("fontSize", self.font_size, DEFAULT_FONT_SIZE)?,
            duration_per_word: number_or_default(
                "durationPerWord",
                self.duration_per_word,
                DEFAULT_DURATION_PER_WORD,
            )?,
            font_family: text_or_default(self.font_family.as_deref(), DEFAULT_FONT_FAMILY),
            ink_color: text_or_default(self.ink_color.as_deref(), DEFAULT_INK_COLOR),
            muted_color: text_or_default(self.muted_color.as_deref(), DEFAULT_MUTED_COLOR),
        };
        config.validate()?;
        Ok(config)
    }
}

fn number_or_default(name: &str, value: Option<f64>, default: f64) -> WordcycleResult<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_nan() || v.is_infinite() => Err(WordcycleError::invalid_config(format!(
            "{name} must be finite (got {v})"
        ))),
        Some(v) if v < 0.0 => Err(WordcycleError::invalid_config(format!(
            "{name} must be >= 0 (got {v})"
        ))),
        // Zero is treated like an absent value.
        Some(v) if v == 0.0 => Ok(default),
        Some(v) => Ok(v),
    }
}

fn text_or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => default.to_owned(),
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Fully resolved, validated generator settings.
pub struct AnimationConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Seconds each word is on screen.
    pub duration_per_word: f64,
    /// CSS font family list.
    pub font_family: String,
    /// Fill for emphasized letters.
    pub ink_color: String,
    /// Fill for the rest of the word.
    pub muted_color: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            duration_per_word: DEFAULT_DURATION_PER_WORD,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            ink_color: DEFAULT_INK_COLOR.to_owned(),
            muted_color: DEFAULT_MUTED_COLOR.to_owned(),
        }
    }
}

impl AnimationConfig {
    /// Check that every value can be written into the markup as-is.
    pub fn validate(&self) -> WordcycleResult<()> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("fontSize", self.font_size),
            ("durationPerWord", self.duration_per_word),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(WordcycleError::invalid_config(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        for (name, v) in [
            ("fontFamily", &self.font_family),
            ("inkColor", &self.ink_color),
            ("mutedColor", &self.muted_color),
        ] {
            check_css_value(name, v)?;
        }
        Ok(())
    }
}

fn check_css_value(name: &str, value: &str) -> WordcycleResult<()> {
    if value.trim().is_empty() {
        return Err(WordcycleError::invalid_config(format!(
            "{name} must be non-empty"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| matches!(c, ';' | '{' | '}' | '<' | '>') || c.is_control())
    {
        return Err(WordcycleError::invalid_config(format!(
            "{name} contains disallowed character {bad:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
