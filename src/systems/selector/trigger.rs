use bevy::prelude::*;

use super::{
    animation::PanelOption, image_fit::FittedImage, layout::padded_image_rect,
    style::SelectorStyle, CurrentValue, ExpandableSelector, SelectorOption, TriggerFrames,
};

/// Text or image child showing the trigger's current value.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TriggerContent;

/// Rebuilds the trigger content when the value or its style changes, and again
/// after the trigger is laid out.
/// Text and image are exclusive: the previous content is always removed.
pub fn render_trigger(
    mut commands: Commands,
    selector_query: Query<
        (Entity, &CurrentValue, &SelectorStyle, Option<&Children>),
        (
            With<ExpandableSelector>,
            Or<(
                Changed<CurrentValue>,
                Changed<SelectorStyle>,
                Changed<ComputedNode>,
            )>,
        ),
    >,
    content_query: Query<(), With<TriggerContent>>,
    frames: TriggerFrames,
) {
    for (entity, value, style, children) in selector_query.iter() {
        if let Some(children) = children {
            for child in children.iter() {
                if content_query.contains(child) {
                    commands.entity(child).despawn();
                }
            }
        }

        match &value.0 {
            SelectorOption::Text(label) => {
                commands.spawn((
                    TriggerContent,
                    Text::new(label.clone()),
                    style.text_font(),
                    TextColor(style.text_color),
                    ChildOf(entity),
                ));
            }
            SelectorOption::Image(image) => {
                let Some(frame) = frames.frame(entity) else {
                    continue;
                };
                let bounds = padded_image_rect(frame.size(), style.image_padding);
                let fitted = FittedImage::new(bounds);
                commands.spawn((
                    TriggerContent,
                    ImageNode::new(image.clone()),
                    fitted.node(),
                    fitted,
                    ChildOf(entity),
                ));
            }
            SelectorOption::Unsupported => {}
        }
    }
}

pub fn sync_trigger_style(
    mut selector_query: Query<
        (&SelectorStyle, &mut BackgroundColor, &mut BorderRadius),
        (With<ExpandableSelector>, Changed<SelectorStyle>),
    >,
) {
    for (style, mut background, mut radius) in selector_query.iter_mut() {
        background.0 = style.background_color;
        *radius = BorderRadius::all(Val::Px(style.corner_radius));
    }
}

/// Shows the selection color behind a pressed trigger or option.
pub fn highlight_pressed(
    mut trigger_query: Query<
        (&Interaction, &SelectorStyle, &mut BackgroundColor),
        (Changed<Interaction>, With<ExpandableSelector>),
    >,
    mut option_query: Query<
        (&Interaction, &PanelOption, &mut BackgroundColor),
        (Changed<Interaction>, Without<ExpandableSelector>),
    >,
    style_query: Query<&SelectorStyle>,
) {
    for (interaction, style, mut background) in trigger_query.iter_mut() {
        background.0 = match interaction {
            Interaction::Pressed => style.selection_color,
            Interaction::Hovered | Interaction::None => style.background_color,
        };
    }

    for (interaction, option, mut background) in option_query.iter_mut() {
        let Ok(style) = style_query.get(option.selector) else {
            continue;
        };
        background.0 = match interaction {
            Interaction::Pressed => style.selection_color,
            Interaction::Hovered | Interaction::None => Color::NONE,
        };
    }
}
