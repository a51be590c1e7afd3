use bevy::prelude::*;

pub const LIGHT_GRAY: Color = Color::srgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
pub const GRAY: Color = Color::srgb(0.5, 0.5, 0.5);
pub const ALERT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

pub trait ColorExt {
    fn to_vec4(self) -> Vec4;
    fn with_opacity(self, opacity: f32) -> Color;
}

impl ColorExt for Color {
    fn to_vec4(self) -> Vec4 {
        let color = self.to_linear();
        Vec4::new(color.red, color.green, color.blue, color.alpha)
    }

    /// Scales the existing alpha so a fade never brightens a translucent color.
    fn with_opacity(self, opacity: f32) -> Color {
        let mut color = self.to_linear();
        color.alpha *= opacity.clamp(0.0, 1.0);
        Color::LinearRgba(color)
    }
}

fn from_vec4(color: Vec4) -> Color {
    Color::LinearRgba(LinearRgba {
        red: color.x,
        green: color.y,
        blue: color.z,
        alpha: color.w,
    })
}

/// Linear-space blend between two colors captured at animation start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTranslation {
    pub initial_color: Vec4,
    pub final_color: Vec4,
}

impl ColorTranslation {
    pub fn new(initial_color: Color, final_color: Color) -> Self {
        Self {
            initial_color: initial_color.to_vec4(),
            final_color: final_color.to_vec4(),
        }
    }

    pub fn sample(&self, fraction_complete: f32) -> Color {
        let fraction_complete = fraction_complete.clamp(0.0, 1.0);
        let difference = self.final_color - self.initial_color;
        from_vec4(self.initial_color + difference * fraction_complete)
    }

    pub fn final_color(&self) -> Color {
        from_vec4(self.final_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_hits_both_endpoints() {
        let translation = ColorTranslation::new(Color::BLACK, Color::WHITE);
        assert_eq!(translation.sample(0.0).to_vec4(), Color::BLACK.to_vec4());
        assert_eq!(translation.sample(1.0).to_vec4(), Color::WHITE.to_vec4());
        assert_eq!(translation.sample(3.0).to_vec4(), Color::WHITE.to_vec4());
    }

    #[test]
    fn opacity_scales_alpha_only() {
        let faded = Color::srgba(1.0, 0.0, 0.0, 0.5).with_opacity(0.5).to_vec4();
        assert!((faded.w - 0.25).abs() < 1e-6);
        assert!((faded.x - 1.0).abs() < 1e-6);
    }
}
