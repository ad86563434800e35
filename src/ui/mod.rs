mod button;
mod dropdown;

pub use button::{Button, ButtonAction};
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::Simulation;
use crate::config::{PREVIEW_BOX_HEIGHT, PREVIEW_BOX_WIDTH};

pub const PANEL_WIDTH: f32 = PREVIEW_BOX_WIDTH as f32 + 20.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Vertical layout of the control panel
pub const DROPDOWN_Y: f32 = 30.0;
pub const LOAD_BUTTON_Y: f32 = 70.0;
pub const PREVIEW_Y: f32 = 115.0;
/// Room under the thumbnail for the pattern description
pub const PREVIEW_CAPTION_HEIGHT: f32 = 32.0;
pub const CONTROLS_Y: f32 =
    PREVIEW_Y + PREVIEW_BOX_HEIGHT as f32 + PREVIEW_CAPTION_HEIGHT + 10.0;
pub const STATS_Y: f32 = CONTROLS_Y + 5.0 * (BUTTON_HEIGHT + 8.0) + 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Left edge of panel content
pub fn content_x() -> f32 {
    panel_x() + 10.0
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Build the panel buttons, enabled to match the current state.
/// Start and Pause are mutually exclusive; Load needs a selected pattern.
pub fn create_buttons(sim: &Simulation, has_selection: bool) -> Vec<Button> {
    let x = content_x();
    let width = PREVIEW_BOX_WIDTH as f32;
    let row = |i: usize| CONTROLS_Y + i as f32 * (BUTTON_HEIGHT + 8.0);

    let button = |y: f32, label: &str, action: ButtonAction| {
        Button::new(x, y, width, BUTTON_HEIGHT, label, action)
    };

    vec![
        button(LOAD_BUTTON_Y, "Load Pattern", ButtonAction::LoadPattern)
            .with_enabled(has_selection),
        button(row(0), "Start", ButtonAction::Start).with_enabled(!sim.is_running),
        button(row(1), "Pause", ButtonAction::Pause).with_enabled(sim.is_running),
        button(row(2), "Reset", ButtonAction::Reset),
        button(row(3), "Clear", ButtonAction::Clear),
        button(row(4), "Random", ButtonAction::Random),
    ]
}
