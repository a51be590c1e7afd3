//! An expandable selector control for `bevy_ui`: a compact button that grows
//! into a row or column of text or image options and collapses back onto the
//! chosen one.
pub mod systems;

pub use systems::selector::{
    solid_image, CurrentValue, ExpandableSelector, ExpandableSelectorPlugin, ExpansionDirection,
    HideOptions, OnOptionSelected, OptionSelected, SelectorOption, SelectorOptions,
    SelectorState, SelectorStyle, SelectorSystems, ShowOptions,
};
