//! Building, animating and tearing down the options panel.
//!
//! A panel always animates toward one target: the expanded frame while
//! opening, the trigger frame while closing. Collapsing retargets the running
//! tween from wherever the panel currently is.
use std::time::Duration;

use bevy::{ecs::hierarchy::ChildSpawnerCommands, prelude::*};

use super::{
    image_fit::FittedImage,
    layout::{OptionSlot, PanelLayout, SlotContent, UNKNOWN_TYPE_LABEL},
    state::{ExpandRequest, SelectorState},
    style::SelectorStyle,
    teardown_panel,
    text_measure::SelectorTextMetrics,
    ExpandableSelector, HideOptions, SelectorOptions, ShowOptions, TriggerFrames,
};
use crate::systems::{
    colors::{ColorExt, ColorTranslation, ALERT_COLOR},
    motion::{ease_in_out, node_rect, place_node, RectTranslation},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelMode {
    Expanding,
    Collapsing { selected_index: usize },
}

#[derive(Component, Clone, Debug)]
#[require(Node, BackgroundColor, BorderRadius)]
pub struct OptionsPanel {
    pub selector: Entity,
    pub token: u64,
    pub mode: PanelMode,
    motion: RectTranslation,
    color: ColorTranslation,
}

impl OptionsPanel {
    fn expanding(
        selector: Entity,
        token: u64,
        trigger: Rect,
        target: Rect,
        style: &SelectorStyle,
    ) -> Self {
        Self {
            selector,
            token,
            mode: PanelMode::Expanding,
            motion: RectTranslation::new(trigger, target, style.animation_duration),
            color: ColorTranslation::new(
                style.background_color,
                style.expanded_background_color,
            ),
        }
    }

    fn retarget_collapse(
        &mut self,
        token: u64,
        selected_index: usize,
        current_rect: Rect,
        current_color: Color,
        trigger: Rect,
        style: &SelectorStyle,
    ) {
        self.token = token;
        self.mode = PanelMode::Collapsing { selected_index };
        self.motion = RectTranslation::new(current_rect, trigger, style.animation_duration);
        self.color = ColorTranslation::new(current_color, style.background_color);
    }

    pub fn target_rect(&self) -> Rect {
        self.motion.final_rect
    }

    pub fn duration(&self) -> Duration {
        self.motion.timer.duration()
    }

    fn advance(&mut self, delta: Duration) -> (Rect, Color) {
        let rect = self.motion.advance(delta);
        let color = if self.motion.finished() {
            self.color.final_color()
        } else {
            self.color.sample(ease_in_out(self.motion.timer.fraction()))
        };
        (rect, color)
    }

    fn in_fade_half(&self) -> bool {
        self.motion.timer.elapsed() < self.duration() / 2
    }
}

/// One option inside a panel. `index` is the tag assigned at build time.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PanelOption {
    pub selector: Entity,
    pub index: usize,
    pub opacity: f32,
}

impl PanelOption {
    pub const fn new(selector: Entity, index: usize) -> Self {
        Self {
            selector,
            index,
            opacity: 1.0,
        }
    }
}

/// Label or image under a [`PanelOption`], remembering its unfaded color.
#[derive(Component, Clone, Copy, Debug)]
pub struct OptionContent {
    pub base_color: Color,
}

#[derive(Component, Clone, Debug)]
pub struct OptionFade {
    pub timer: Timer,
}

impl OptionFade {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }
}

/// Moves the chosen option back onto the trigger while the panel shrinks.
#[derive(Component, Clone, Debug)]
pub struct OptionReturn(pub RectTranslation);

pub fn show_options(
    mut commands: Commands,
    mut requests: EventReader<ShowOptions>,
    metrics: Res<SelectorTextMetrics>,
    mut selector_query: Query<(
        &ExpandableSelector,
        &SelectorOptions,
        &SelectorStyle,
        &mut SelectorState,
        Option<&ChildOf>,
    )>,
    frames: TriggerFrames,
) {
    for request in requests.read() {
        let Ok((selector, options, style, mut state, parent)) =
            selector_query.get_mut(request.selector)
        else {
            warn!("ShowOptions for {:?}, which is not a selector", request.selector);
            continue;
        };

        let Some(frame) = frames.frame(request.selector) else {
            continue;
        };
        let ExpandRequest::Start {
            token,
            cancelled_panel,
        } = state.begin_expand()
        else {
            debug!("selector {:?} is already expanded", request.selector);
            continue;
        };

        if let Some(panel) = cancelled_panel {
            debug!("selector {:?} reopened mid-collapse; dropping {panel:?}", request.selector);
            teardown_panel(&mut commands, panel);
        }

        let layout = PanelLayout::build(
            &options.0,
            selector.direction,
            style,
            frame.size(),
            &metrics,
        );
        let target = selector.direction.expanded_frame(frame, layout.extent());
        let panel = spawn_panel(
            &mut commands,
            OptionsPanel::expanding(request.selector, token, frame, target, style),
            parent.map(ChildOf::parent),
            frame,
            style,
            &layout,
        );
        state.attach_panel(panel);
        debug!(
            "selector {:?} expanding {:?} with {} options to {target:?}",
            request.selector,
            selector.direction,
            layout.slots().len()
        );
    }
}

fn spawn_panel(
    commands: &mut Commands,
    panel: OptionsPanel,
    parent: Option<Entity>,
    frame: Rect,
    style: &SelectorStyle,
    layout: &PanelLayout,
) -> Entity {
    let selector = panel.selector;
    let mut node = Node {
        overflow: Overflow::clip(),
        ..default()
    };
    place_node(&mut node, frame);

    let mut panel_commands = commands.spawn((
        panel,
        node,
        BackgroundColor(style.background_color),
        BorderRadius::all(Val::Px(style.corner_radius)),
        ZIndex(1),
    ));
    if let Some(parent) = parent {
        panel_commands.insert(ChildOf(parent));
    }
    panel_commands.with_children(|panel| {
        for slot in layout.slots() {
            spawn_option(panel, selector, slot, style);
        }
    });
    panel_commands.id()
}

fn spawn_option(
    panel: &mut ChildSpawnerCommands,
    selector: Entity,
    slot: &OptionSlot,
    style: &SelectorStyle,
) {
    let mut node = Node {
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    };
    place_node(&mut node, slot.rect);

    panel
        .spawn((
            Button,
            PanelOption::new(selector, slot.index),
            node,
            BackgroundColor(Color::NONE),
        ))
        .with_children(|option| match &slot.content {
            SlotContent::Text(label) => {
                option.spawn((
                    Text::new(label.clone()),
                    style.text_font(),
                    TextColor(style.expanded_text_color),
                    OptionContent {
                        base_color: style.expanded_text_color,
                    },
                ));
            }
            SlotContent::Image(image) => {
                let fitted = FittedImage::new(slot.image_rect(style.image_padding));
                option.spawn((
                    ImageNode::new(image.clone()),
                    fitted.node(),
                    fitted,
                    OptionContent {
                        base_color: Color::WHITE,
                    },
                ));
            }
            SlotContent::Unknown => {
                option.spawn((
                    Text::new(UNKNOWN_TYPE_LABEL),
                    style.text_font(),
                    TextColor(ALERT_COLOR),
                    OptionContent {
                        base_color: ALERT_COLOR,
                    },
                ));
            }
        });
}

pub fn hide_options(
    mut commands: Commands,
    mut requests: EventReader<HideOptions>,
    mut selector_query: Query<(&SelectorStyle, &mut SelectorState), With<ExpandableSelector>>,
    mut panel_query: Query<(&mut OptionsPanel, &Node, &BackgroundColor, Option<&Children>)>,
    option_query: Query<(&PanelOption, &Node)>,
    frames: TriggerFrames,
) {
    for request in requests.read() {
        let Ok((style, mut state)) = selector_query.get_mut(request.selector) else {
            warn!("HideOptions for {:?}, which is not a selector", request.selector);
            continue;
        };
        let Some(trigger) = frames.frame(request.selector) else {
            continue;
        };
        let Some(collapse) = state.begin_collapse() else {
            debug!("selector {:?} is already collapsed", request.selector);
            continue;
        };
        let Some(panel_entity) = collapse.panel else {
            state.finish(collapse.token);
            continue;
        };
        let Ok((mut panel, panel_node, background, children)) = panel_query.get_mut(panel_entity)
        else {
            state.forget_panel(panel_entity);
            continue;
        };

        let selected_index = request.selected_index.unwrap_or(0);
        panel.retarget_collapse(
            collapse.token,
            selected_index,
            node_rect(panel_node),
            background.0,
            trigger,
            style,
        );

        let fade_duration = style.animation_duration / 2;
        let options = children.map(|children| children.iter().collect::<Vec<_>>());
        for child in options.unwrap_or_default() {
            let Ok((option, option_node)) = option_query.get(child) else {
                continue;
            };
            if option.index != selected_index {
                commands.entity(child).insert(OptionFade::new(fade_duration));
            } else if request.selected_index.is_some() {
                // the panel ends on the trigger frame, so the trigger sits at the panel origin
                let home = Rect::from_corners(Vec2::ZERO, trigger.size());
                commands.entity(child).insert(OptionReturn(RectTranslation::new(
                    node_rect(option_node),
                    home,
                    style.animation_duration,
                )));
            }
        }
        debug!(
            "selector {:?} collapsing onto option {selected_index}",
            request.selector
        );
    }
}

pub fn animate_panels(
    mut commands: Commands,
    time: Res<Time>,
    mut panel_query: Query<(Entity, &mut OptionsPanel, &mut Node, &mut BackgroundColor)>,
    mut selector_query: Query<&mut SelectorState>,
) {
    for (entity, mut panel, mut node, mut background) in panel_query.iter_mut() {
        let Ok(mut state) = selector_query.get_mut(panel.selector) else {
            debug!("selector of panel {entity:?} is gone; tearing down");
            teardown_panel(&mut commands, entity);
            continue;
        };
        if !state.is_current(panel.token) || state.panel() != Some(entity) {
            teardown_panel(&mut commands, entity);
            continue;
        }

        let (rect, color) = panel.advance(time.delta());
        place_node(&mut node, rect);
        background.0 = color;

        match panel.mode {
            PanelMode::Expanding => {
                if panel.motion.finished() {
                    state.finish(panel.token);
                }
            }
            PanelMode::Collapsing { .. } => {
                if !panel.in_fade_half() {
                    state.enter_shrink(panel.token);
                }
                if panel.motion.finished() {
                    state.finish(panel.token);
                    teardown_panel(&mut commands, entity);
                    debug!("selector {:?} collapsed", panel.selector);
                }
            }
        }
    }
}

pub fn fade_options(
    time: Res<Time>,
    mut option_query: Query<(&mut PanelOption, &mut OptionFade, &Children)>,
    mut content_query: Query<(&OptionContent, Option<&mut TextColor>, Option<&mut ImageNode>)>,
) {
    for (mut option, mut fade, children) in option_query.iter_mut() {
        fade.timer.tick(time.delta());
        option.opacity = 1.0 - fade.timer.fraction();

        for child in children.iter() {
            let Ok((content, text_color, image)) = content_query.get_mut(child) else {
                continue;
            };
            let color = content.base_color.with_opacity(option.opacity);
            if let Some(mut text_color) = text_color {
                text_color.0 = color;
            }
            if let Some(mut image) = image {
                image.color = color;
            }
        }
    }
}

pub fn return_selected_option(
    time: Res<Time>,
    mut option_query: Query<(&mut OptionReturn, &mut Node)>,
) {
    for (mut motion, mut node) in option_query.iter_mut() {
        let rect = motion.0.advance(time.delta());
        place_node(&mut node, rect);
    }
}
