use log::{error, info};
use macroquad::prelude::*;
use life_engine::{
    Simulation, Viewport,
    config::DriverConfig,
    domain::library,
    input, rendering,
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1020,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    // Grid is sized once from the initial window, like a fixed canvas
    let viewport = Viewport::default();
    let (rows, cols) = viewport.grid_dimensions(ui::grid_area_width(), ui::grid_area_height());
    let mut sim = match Simulation::new(rows, cols, DriverConfig::default()) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot start: {err}");
            return;
        }
    };
    info!("grid size {cols}x{rows}, {} cells", rows * cols);

    let names: Vec<String> = library().names().map(str::to_owned).collect();
    let mut pattern_dropdown = Dropdown::new(
        ui::content_x(),
        ui::DROPDOWN_Y,
        ui::PANEL_WIDTH - 20.0,
        "Pattern",
        "Select a pattern...",
        names,
    );

    loop {
        let mouse_pos = mouse_position();
        pattern_dropdown.set_position(ui::content_x(), ui::DROPDOWN_Y);

        // An open menu swallows clicks so they don't reach buttons below it
        let menu_was_open = pattern_dropdown.is_open();
        pattern_dropdown.update(mouse_pos);
        let selected = pattern_dropdown.selected_item().map(str::to_owned);
        let preview = selected.as_deref().and_then(|name| library().lookup(name).ok());

        let buttons = ui::create_buttons(&sim, selected.is_some());
        if !menu_was_open && !pattern_dropdown.is_open() {
            sim = input::process_button_clicks(sim, &buttons, selected.as_deref(), mouse_pos);
            input::handle_cell_click(&mut sim, &viewport, mouse_pos);
        }
        sim = input::process_keyboard_input(sim);

        sim = sim.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(Color::from_rgba(20, 20, 20, 255));
        rendering::draw_grid(&sim.grid, &viewport);
        rendering::draw_controls(&sim, &buttons, &pattern_dropdown, preview, mouse_pos);
        sim.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
