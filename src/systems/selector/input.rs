use bevy::prelude::*;

use super::{
    animation::PanelOption, state::SelectorState, style::SelectorStyle, CurrentValue,
    ExpandableSelector, HideOptions, OnOptionSelected, OptionSelected, SelectorOption,
    SelectorOptions, ShowOptions,
};

/// What a tap on option `index` does to the selector.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSelection {
    pub index: usize,
    pub value: SelectorOption,
    pub collapse: bool,
}

impl OptionSelection {
    /// Copies the option at `index` out of the list as it is right now.
    ///
    /// # Panics
    ///
    /// When `index` is out of range. Option tags are positions taken when the
    /// panel was built, so replacing the option list while expanded can leave
    /// stale tags behind.
    pub fn resolve(options: &SelectorOptions, index: usize, auto_hide: bool) -> Self {
        let Some(value) = options.get(index) else {
            panic!(
                "option index {index} is out of range for {} options; \
                 the option list changed while the panel was open",
                options.len()
            );
        };
        Self {
            index,
            value: value.clone(),
            collapse: auto_hide,
        }
    }
}

pub fn activate_trigger(
    trigger_query: Query<(Entity, &Interaction), (Changed<Interaction>, With<ExpandableSelector>)>,
    mut show_writer: EventWriter<ShowOptions>,
) {
    for (selector, interaction) in trigger_query.iter() {
        if *interaction == Interaction::Pressed {
            show_writer.write(ShowOptions { selector });
        }
    }
}

pub fn activate_option(
    option_query: Query<(&Interaction, &PanelOption), Changed<Interaction>>,
    mut selector_query: Query<(
        &SelectorOptions,
        &SelectorStyle,
        &SelectorState,
        &mut CurrentValue,
        Option<&mut OnOptionSelected>,
    )>,
    mut selected_writer: EventWriter<OptionSelected>,
    mut hide_writer: EventWriter<HideOptions>,
) {
    for (interaction, option) in option_query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Ok((options, style, state, mut current_value, callback)) =
            selector_query.get_mut(option.selector)
        else {
            continue;
        };
        if !state.is_expanded() {
            continue;
        }

        let selection = OptionSelection::resolve(options, option.index, style.auto_hide);
        current_value.set(selection.value);
        if let Some(mut callback) = callback {
            callback.call(selection.index);
        }
        selected_writer.write(OptionSelected {
            selector: option.selector,
            index: selection.index,
        });
        if selection.collapse {
            hide_writer.write(HideOptions {
                selector: option.selector,
                selected_index: Some(selection.index),
            });
        }
    }
}
