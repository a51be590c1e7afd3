//! Expandable selector: a compact trigger button that grows into a row or
//! column of options along a fixed direction and collapses back onto the
//! chosen value.
//!
//! The trigger entity carries [`ExpandableSelector`] plus its data
//! components. The options panel is a transient sibling spawned on
//! [`ShowOptions`] and despawned when its collapse animation ends.
use bevy::{
    ecs::{component::HookContext, system::SystemParam, world::DeferredWorld},
    prelude::*,
};

use crate::systems::motion::{node_rect, place_node};

pub mod animation;
pub mod geometry;
pub mod image_fit;
pub mod input;
pub mod layout;
pub mod state;
pub mod style;
pub mod text_measure;
pub mod trigger;


pub use animation::{OptionContent, OptionFade, OptionReturn, OptionsPanel, PanelMode, PanelOption};
pub use geometry::Axis;
pub use image_fit::{aspect_fit, solid_image, FittedImage};
pub use layout::{OptionSlot, PanelLayout, SlotContent, UNKNOWN_TYPE_LABEL};
pub use state::{AnimationPhase, ExpansionState, SelectorState};
pub use style::{SelectorStyle, StyleConfigError};
pub use text_measure::{AdvanceWidthMeasure, SelectorTextMetrics, TextMeasure};

pub struct ExpandableSelectorPlugin;

impl Plugin for ExpandableSelectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShowOptions>()
            .add_event::<HideOptions>()
            .add_event::<OptionSelected>()
            .init_resource::<SelectorTextMetrics>()
            .add_systems(
                Update,
                (
                    input::activate_trigger,
                    input::activate_option,
                    animation::show_options,
                    animation::hide_options,
                    (
                        animation::animate_panels,
                        animation::fade_options,
                        animation::return_selected_option,
                    )
                        .chain()
                        .run_if(any_with_component::<OptionsPanel>),
                    trigger::render_trigger,
                    trigger::sync_trigger_style,
                    trigger::highlight_pressed,
                    image_fit::fit_images,
                )
                    .chain()
                    .in_set(SelectorSystems),
            );
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorSystems;

/// One entry of the option list. Options are addressed by position only.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SelectorOption {
    Text(String),
    Image(Handle<Image>),
    #[default]
    Unsupported,
}

impl SelectorOption {
    pub fn text(label: impl Into<String>) -> Self {
        Self::Text(label.into())
    }
}

impl From<&str> for SelectorOption {
    fn from(label: &str) -> Self {
        Self::Text(label.to_string())
    }
}

impl From<String> for SelectorOption {
    fn from(label: String) -> Self {
        Self::Text(label)
    }
}

impl From<Handle<Image>> for SelectorOption {
    fn from(image: Handle<Image>) -> Self {
        Self::Image(image)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExpansionDirection {
    Up,
    #[default]
    Right,
    Down,
    Left,
}

/// The trigger of an expandable selector.
///
/// Spawn it with [`ExpandableSelector::with_frame`] for explicit geometry, or
/// insert [`ExpandableSelector::new`] on a node the host already laid out with
/// pixel `left`/`top`/`width`/`height`. The frame is read from the node every
/// time the panel opens.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[require(
    Button,
    SelectorOptions,
    CurrentValue,
    SelectorStyle,
    SelectorState,
    BackgroundColor,
    BorderRadius
)]
#[component(on_insert = ExpandableSelector::on_insert)]
pub struct ExpandableSelector {
    pub direction: ExpansionDirection,
}

impl ExpandableSelector {
    pub const fn new(direction: ExpansionDirection) -> Self {
        Self { direction }
    }

    pub fn with_frame(direction: ExpansionDirection, frame: Rect) -> (Self, Node) {
        let mut node = Node::default();
        place_node(&mut node, frame);
        (Self::new(direction), node)
    }

    fn on_insert(mut world: DeferredWorld, HookContext { entity, .. }: HookContext) {
        let Some(mut node) = world.get_mut::<Node>(entity) else {
            warn!("ExpandableSelector inserted on {entity:?} without a Node");
            return;
        };
        node.overflow = Overflow::clip();
        node.justify_content = JustifyContent::Center;
        node.align_items = AlignItems::Center;
    }
}

/// Ordered option list, replaced wholesale by the host.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct SelectorOptions(pub Vec<SelectorOption>);

impl SelectorOptions {
    pub fn new<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectorOption>,
    {
        Self(options.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, index: usize) -> Option<&SelectorOption> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Value shown on the collapsed trigger. Not checked against the option list.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct CurrentValue(pub SelectorOption);

impl CurrentValue {
    /// Replaces the value; the trigger re-renders in the same update.
    pub fn set(&mut self, value: impl Into<SelectorOption>) {
        self.0 = value.into();
    }
}

/// Host callback invoked with the selected index on every selection.
#[derive(Component)]
pub struct OnOptionSelected(Box<dyn FnMut(usize) + Send + Sync>);

impl OnOptionSelected {
    pub fn new(callback: impl FnMut(usize) + Send + Sync + 'static) -> Self {
        Self(Box::new(callback))
    }

    pub fn call(&mut self, index: usize) {
        (self.0)(index);
    }
}

/// Forces the panel open. Ignored while the selector is already expanded.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowOptions {
    pub selector: Entity,
}

/// Forces the panel closed. `selected_index` keeps that option visible while
/// the others fade; `None` means index 0.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideOptions {
    pub selector: Entity,
    pub selected_index: Option<usize>,
}

impl HideOptions {
    pub const fn dismiss(selector: Entity) -> Self {
        Self {
            selector,
            selected_index: None,
        }
    }
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionSelected {
    pub selector: Entity,
    pub index: usize,
}

/// Reads trigger frames in the coordinate space of the trigger's parent.
#[derive(SystemParam)]
pub struct TriggerFrames<'w, 's> {
    nodes: Query<
        'w,
        's,
        (
            &'static Node,
            Option<&'static ComputedNode>,
            Option<&'static GlobalTransform>,
            Option<&'static ChildOf>,
        ),
    >,
}

impl TriggerFrames<'_, '_> {
    /// Frame of `entity` as laid out on screen, or from its pixel `Node`
    /// fields before the first layout pass.
    pub fn frame(&self, entity: Entity) -> Option<Rect> {
        let (node, computed, transform, parent) = self.nodes.get(entity).ok()?;
        let laid_out = computed
            .zip(transform)
            .filter(|(computed, _)| computed.size().cmpgt(Vec2::ZERO).all());
        let Some((computed, transform)) = laid_out else {
            return Some(node_frame(entity, node));
        };

        let origin = parent
            .and_then(|parent| self.nodes.get(parent.parent()).ok())
            .and_then(|(_, computed, transform, _)| Some(top_left(computed?, transform?)))
            .unwrap_or(Vec2::ZERO);
        let min = top_left(computed, transform) - origin;
        let scale = computed.inverse_scale_factor();
        Some(Rect::from_corners(min * scale, (min + computed.size()) * scale))
    }
}

/// Top-left corner of a laid-out node, in physical pixels.
fn top_left(computed: &ComputedNode, transform: &GlobalTransform) -> Vec2 {
    transform.translation().truncate() - computed.size() * 0.5
}

/// Frame taken from the pixel fields of a node that has not been laid out.
pub fn node_frame(entity: Entity, node: &Node) -> Rect {
    let is_px = |value: Val| matches!(value, Val::Px(_));
    if !(is_px(node.left) && is_px(node.top) && is_px(node.width) && is_px(node.height)) {
        warn!(
            "selector {entity:?} has no layout yet and is not sized in pixels; \
             non-pixel edges count as zero"
        );
    }
    node_rect(node)
}

/// Despawns a panel together with every option it owns.
pub(crate) fn teardown_panel(commands: &mut Commands, panel: Entity) {
    if let Ok(mut panel_commands) = commands.get_entity(panel) {
        // recursive: the option entities go with it
        panel_commands.try_despawn();
    }
}
