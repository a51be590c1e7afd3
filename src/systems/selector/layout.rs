//! Options panel geometry, computed before anything is spawned.
use bevy::prelude::*;
use smallvec::SmallVec;

use super::{
    geometry::Axis, style::SelectorStyle, text_measure::SelectorTextMetrics, ExpansionDirection,
    SelectorOption,
};

pub const UNKNOWN_TYPE_LABEL: &str = "UNKNOWN_TYPE";

#[derive(Clone, Debug, PartialEq)]
pub enum SlotContent {
    Text(String),
    Image(Handle<Image>),
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionSlot {
    /// Position in the option list when the panel was built.
    pub index: usize,
    /// Frame inside the panel.
    pub rect: Rect,
    pub content: SlotContent,
}

impl OptionSlot {
    /// Image frame relative to the slot, inset by `padding` on every side.
    pub fn image_rect(&self, padding: f32) -> Rect {
        padded_image_rect(self.rect.size(), padding)
    }
}

/// Box of `size` inset by `padding` on every side, clamped so it never inverts.
pub fn padded_image_rect(size: Vec2, padding: f32) -> Rect {
    let inset = padding.min(size.x * 0.5).min(size.y * 0.5).max(0.0);
    Rect::new(inset, inset, size.x - inset, size.y - inset)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelLayout {
    slots: SmallVec<[OptionSlot; 4]>,
    extent: f32,
}

impl PanelLayout {
    /// Lays options out back to back along the expansion axis.
    ///
    /// Every slot starts at `max(min_option_extent, trigger extent)` along the
    /// axis and spans the trigger's cross dimension. A label wider than both
    /// the minimum and the trigger stretches its own slot to its exact width.
    pub fn build(
        options: &[SelectorOption],
        direction: ExpansionDirection,
        style: &SelectorStyle,
        trigger_size: Vec2,
        metrics: &SelectorTextMetrics,
    ) -> Self {
        let axis = direction.axis();
        let trigger_extent = axis.along(trigger_size);
        let cross = axis.across(trigger_size);
        let initial_extent = style.min_option_extent.max(trigger_extent);

        let mut slots = SmallVec::new();
        let mut offset = 0.0;

        for (index, option) in options.iter().enumerate() {
            let (extent, content) = match option {
                SelectorOption::Text(label) => {
                    let width = metrics.width(label, style.font_size);
                    let extent = if width > style.min_option_extent && width > trigger_extent {
                        width
                    } else {
                        initial_extent
                    };
                    (extent, SlotContent::Text(label.clone()))
                }
                SelectorOption::Image(image) => (initial_extent, SlotContent::Image(image.clone())),
                SelectorOption::Unsupported => (initial_extent, SlotContent::Unknown),
            };

            let rect = match axis {
                Axis::Horizontal => Rect::new(offset, 0.0, offset + extent, cross),
                Axis::Vertical => Rect::new(0.0, offset, cross, offset + extent),
            };
            slots.push(OptionSlot {
                index,
                rect,
                content,
            });
            offset += extent;
        }

        Self {
            slots,
            extent: offset,
        }
    }

    pub fn slots(&self) -> &[OptionSlot] {
        &self.slots
    }

    /// Along-axis size of the fully expanded panel.
    pub fn extent(&self) -> f32 {
        self.extent
    }
}
