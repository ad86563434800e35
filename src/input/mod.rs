use log::warn;
use macroquad::prelude::*;

use crate::application::{Simulation, Viewport};
use crate::ui::{Button, ButtonAction, grid_area_width};

/// Toggle the cell under the cursor on left click
pub fn handle_cell_click(sim: &mut Simulation, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let Some((row, col)) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    // Clicks past the last row or column land here and are ignored
    if let Err(err) = sim.toggle_cell(row, col) {
        warn!("click ignored: {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally. `pattern` is the name currently
/// chosen in the pattern selector.
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    pattern: Option<&str>,
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(sim, |s, btn| apply_action(s, btn.action(), pattern))
}

fn apply_action(sim: Simulation, action: ButtonAction, pattern: Option<&str>) -> Simulation {
    match action {
        ButtonAction::Start => sim.start(),
        ButtonAction::Pause => sim.pause(),
        ButtonAction::Reset => sim.reset(),
        ButtonAction::Clear => sim.clear(),
        ButtonAction::Random => sim.randomize(),
        ButtonAction::LoadPattern => {
            let mut sim = sim;
            if let Some(name) = pattern {
                if let Err(err) = sim.load_pattern(name) {
                    warn!("pattern not loaded: {err}");
                }
            }
            sim
        }
    }
}
