use bevy::prelude::*;

/// Measures rendered label width before layout has run.
pub trait TextMeasure: Send + Sync + 'static {
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed advance per character, expressed as a fraction of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvanceWidthMeasure {
    pub advance_per_em: f32,
}

impl Default for AdvanceWidthMeasure {
    fn default() -> Self {
        Self {
            advance_per_em: 0.6,
        }
    }
}

impl TextMeasure for AdvanceWidthMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        let longest_line = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        longest_line as f32 * font_size * self.advance_per_em
    }
}

#[derive(Resource)]
pub struct SelectorTextMetrics(pub Box<dyn TextMeasure>);

impl SelectorTextMetrics {
    pub fn new(measure: impl TextMeasure) -> Self {
        Self(Box::new(measure))
    }

    pub fn width(&self, text: &str, font_size: f32) -> f32 {
        self.0.width(text, font_size)
    }
}

impl Default for SelectorTextMetrics {
    fn default() -> Self {
        Self::new(AdvanceWidthMeasure::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_longest_line() {
        let measure = AdvanceWidthMeasure { advance_per_em: 0.5 };
        assert_eq!(measure.width("On\nAutomatic", 10.0), 45.0);
        assert_eq!(measure.width("", 10.0), 0.0);
    }
}
