//! Aspect-preserving placement of option and trigger images.
use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

use crate::systems::motion::place_node;

/// Single-color image of `size` pixels, for placeholders and swatches.
pub fn solid_image(size: UVec2, color: Color) -> Image {
    Image::new_fill(
        Extent3d {
            width: size.x.max(1),
            height: size.y.max(1),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &color.to_srgba().to_u8_array(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// Largest rect with the aspect ratio of `image_size` that fits in `bounds`,
/// centered in it.
pub fn aspect_fit(bounds: Rect, image_size: Vec2) -> Rect {
    let available = bounds.size();
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (available.x / image_size.x).min(available.y / image_size.y);
    Rect::from_center_size(bounds.center(), image_size * scale)
}

/// Image node kept at the aspect-fit rect inside `bounds`.
///
/// Until the image asset is loaded the node fills `bounds`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FittedImage {
    pub bounds: Rect,
    fitted_to: Option<Vec2>,
}

impl FittedImage {
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            fitted_to: None,
        }
    }

    /// Node placed over `bounds`, to spawn alongside this component.
    pub fn node(&self) -> Node {
        let mut node = Node::default();
        place_node(&mut node, self.bounds);
        node
    }
}

pub fn fit_images(
    images: Option<Res<Assets<Image>>>,
    mut image_query: Query<(&mut FittedImage, &ImageNode, &mut Node)>,
) {
    let Some(images) = images else {
        return;
    };
    for (mut fitted, image_node, mut node) in image_query.iter_mut() {
        let Some(image) = images.get(&image_node.image) else {
            continue;
        };
        let size = image.size_f32();
        if fitted.fitted_to == Some(size) {
            continue;
        }
        place_node(&mut node, aspect_fit(fitted.bounds, size));
        fitted.fitted_to = Some(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fills_width_and_centers_vertically() {
        let bounds = Rect::new(6.0, 6.0, 54.0, 38.0);
        let fit = aspect_fit(bounds, Vec2::new(120.0, 40.0));

        assert_eq!(fit.width(), 48.0);
        assert_eq!(fit.height(), 16.0);
        assert_eq!(fit.center(), bounds.center());
        assert!(bounds.contains(fit.min) && bounds.contains(fit.max));
    }

    #[test]
    fn tall_image_fills_height() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 20.0);
        let fit = aspect_fit(bounds, Vec2::new(10.0, 40.0));

        assert_eq!(fit, Rect::new(17.5, 0.0, 22.5, 20.0));
    }

    #[test]
    fn empty_image_keeps_the_bounds() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(aspect_fit(bounds, Vec2::ZERO), bounds);
    }

    #[test]
    fn solid_image_has_the_requested_shape() {
        let image = solid_image(UVec2::new(96, 48), Color::WHITE);
        assert_eq!(image.size(), UVec2::new(96, 48));
        assert_eq!(image.data.as_deref().map(<[u8]>::len), Some(96 * 48 * 4));
    }
}
