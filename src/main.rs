use bevy::prelude::*;

use expandable_selector::{
    solid_image, CurrentValue, ExpandableSelector, ExpandableSelectorPlugin, ExpansionDirection,
    HideOptions, OnOptionSelected, OptionSelected, SelectorOption, SelectorOptions,
    SelectorState, SelectorStyle,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(ExpandableSelectorPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (dismiss_on_esc, log_selections))
        .run();
}

fn setup(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    commands.spawn(Camera2d);

    // generated swatches in three shapes stand in for icon files
    let icons: Vec<Handle<Image>> = [
        (UVec2::new(64, 64), Color::srgb(0.93, 0.55, 0.25)),
        (UVec2::new(96, 48), Color::srgb(0.36, 0.68, 0.89)),
        (UVec2::new(40, 80), Color::srgb(0.55, 0.80, 0.45)),
    ]
    .into_iter()
    .map(|(size, color)| images.add(solid_image(size, color)))
    .collect();

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|root| {
            // text options growing to the right
            root.spawn((
                ExpandableSelector::with_frame(
                    ExpansionDirection::Right,
                    Rect::new(16.0, 28.0, 96.0, 72.0),
                ),
                SelectorOptions::new(["Auto", "On", "Off"]),
                CurrentValue(SelectorOption::from("Auto")),
                SelectorStyle {
                    corner_radius: 22.0,
                    ..default()
                },
                OnOptionSelected::new(|index| {
                    info!("[Right] selected option at index {index}");
                }),
            ));

            // image options growing to the left
            let teal = Color::srgb(75.0 / 256.0, 178.0 / 256.0, 174.0 / 256.0);
            let midnight = Color::srgb(44.0 / 256.0, 62.0 / 256.0, 80.0 / 256.0);
            root.spawn((
                ExpandableSelector::with_frame(
                    ExpansionDirection::Left,
                    Rect::new(280.0, 100.0, 344.0, 164.0),
                ),
                SelectorOptions(icons.iter().cloned().map(SelectorOption::Image).collect()),
                CurrentValue(SelectorOption::Image(icons[2].clone())),
                SelectorStyle {
                    corner_radius: 32.0,
                    image_padding: 12.0,
                    selection_color: teal,
                    background_color: midnight,
                    expanded_background_color: midnight,
                    ..default()
                },
                OnOptionSelected::new(|index| {
                    info!("[Left] selected icon at index {index}");
                }),
            ));

            // text options growing downward
            root.spawn((
                ExpandableSelector::with_frame(
                    ExpansionDirection::Down,
                    Rect::new(16.0, 200.0, 96.0, 244.0),
                ),
                SelectorOptions::new(["Auto", "On", "Off"]),
                CurrentValue(SelectorOption::from("On")),
                OnOptionSelected::new(|index| {
                    info!("[Down] selected option at index {index}");
                }),
            ));

            // mixed options growing upward
            root.spawn((
                ExpandableSelector::with_frame(
                    ExpansionDirection::Up,
                    Rect::new(200.0, 420.0, 280.0, 464.0),
                ),
                SelectorOptions(vec![
                    SelectorOption::from("Dog"),
                    SelectorOption::Image(icons[1].clone()),
                    SelectorOption::from("Mouse"),
                ]),
                CurrentValue(SelectorOption::from("Dog")),
                OnOptionSelected::new(|index| {
                    info!("[Up] selected option at index {index}");
                }),
            ));
        });
}

fn dismiss_on_esc(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    selector_query: Query<(Entity, &SelectorState)>,
    mut hide_writer: EventWriter<HideOptions>,
) {
    if !keyboard_input.just_pressed(KeyCode::Escape) {
        return;
    }
    for (selector, state) in selector_query.iter() {
        if state.is_expanded() {
            hide_writer.write(HideOptions::dismiss(selector));
        }
    }
}

fn log_selections(mut selections: EventReader<OptionSelected>) {
    for selection in selections.read() {
        debug!("selector {:?} picked {}", selection.selector, selection.index);
    }
}
