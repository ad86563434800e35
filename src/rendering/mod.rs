use macroquad::prelude::*;

use crate::application::{Simulation, Viewport};
use crate::config::{PREVIEW_BOX_HEIGHT, PREVIEW_BOX_WIDTH};
use crate::domain::{Grid, Stamp, preview_layout};
use crate::ui::{
    Button, Dropdown, PANEL_WIDTH, PREVIEW_Y, STATS_Y, content_x, grid_area_height,
    grid_area_width, panel_x,
};

const BACKGROUND: Color = Color::new(0.97, 0.98, 0.98, 1.0);
const GRID_LINE: Color = Color::new(0.91, 0.93, 0.94, 1.0);
const ALIVE: Color = Color::new(0.20, 0.23, 0.25, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Characters per caption line under the thumbnail
const CAPTION_CHARS: usize = 30;

/// Greedy word wrap into lines of at most `max_chars` characters.
/// A single word longer than the limit gets a line of its own.
fn caption_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= max_chars => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_owned()),
        }
    }
    lines
}

/// Draw the grid: background, faint lines, then live cells inset by a pixel
pub fn draw_grid(grid: &Grid, viewport: &Viewport) {
    let (rows, cols) = grid.dimensions();
    let size = viewport.cell_size;
    let width = (cols as f32 * size).min(grid_area_width());
    let height = (rows as f32 * size).min(grid_area_height());

    draw_rectangle(viewport.offset_x, viewport.offset_y, width, height, BACKGROUND);

    for col in 0..=cols {
        let (x, _) = viewport.grid_to_screen(0, col);
        draw_line(x, viewport.offset_y, x, viewport.offset_y + height, 0.5, GRID_LINE);
    }
    for row in 0..=rows {
        let (_, y) = viewport.grid_to_screen(row, 0);
        draw_line(viewport.offset_x, y, viewport.offset_x + width, y, 0.5, GRID_LINE);
    }

    for (row, col) in grid.alive_cells() {
        let (x, y) = viewport.grid_to_screen(row, col);
        draw_rectangle(x + 1.0, y + 1.0, size - 2.0, size - 2.0, ALIVE);
    }
}

/// Draw a pattern thumbnail centered in the preview box at (`x`, `y`),
/// with the pattern's description underneath
pub fn draw_pattern_preview(stamp: Option<&Stamp>, x: f32, y: f32, max_cell_size: u32) {
    draw_rectangle(x, y, PREVIEW_BOX_WIDTH as f32, PREVIEW_BOX_HEIGHT as f32, BACKGROUND);
    draw_rectangle_lines(
        x,
        y,
        PREVIEW_BOX_WIDTH as f32,
        PREVIEW_BOX_HEIGHT as f32,
        1.0,
        GRAY,
    );

    let Some(stamp) = stamp else {
        return;
    };

    let caption_y = y + PREVIEW_BOX_HEIGHT as f32 + 14.0;
    for (i, line) in caption_lines(stamp.description(), CAPTION_CHARS).iter().take(2).enumerate() {
        draw_text(line, x, caption_y + i as f32 * 14.0, 14.0, LIGHTGRAY);
    }

    let layout = preview_layout(stamp, PREVIEW_BOX_WIDTH, PREVIEW_BOX_HEIGHT, max_cell_size);
    let cell = layout.cell_size as f32;
    for (row, col) in stamp.alive_offsets() {
        draw_rectangle(
            x + layout.offset_x + col as f32 * cell,
            y + layout.offset_y + row as f32 * cell,
            (cell - 1.0).max(1.0),
            (cell - 1.0).max(1.0),
            ALIVE,
        );
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Population bar filled to the live-cell percentage
fn draw_population_bar(x: f32, y: f32, percentage: f64) {
    let width = PREVIEW_BOX_WIDTH as f32;
    draw_rectangle(x, y, width, 10.0, Color::from_rgba(60, 60, 60, 255));
    draw_rectangle(
        x,
        y,
        width * (percentage / 100.0) as f32,
        10.0,
        Color::from_rgba(0, 200, 120, 255),
    );
}

/// Draw the control panel: buttons, preview, stats, then the dropdown on top
pub fn draw_controls(
    sim: &Simulation,
    buttons: &[Button],
    dropdown: &Dropdown,
    preview: Option<&Stamp>,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let x = content_x();
    draw_pattern_preview(preview, x, PREVIEW_Y, sim.config.preview_max_cell_size);

    let (rows, cols) = sim.grid.dimensions();
    let percentage = sim.population_percentage();
    let labels = [
        (format!("Grid: {cols}x{rows}"), 0.0, 13.0, GRAY),
        ("Generation:".to_owned(), 25.0, 16.0, WHITE),
        (sim.generation().to_string(), 45.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Alive cells:".to_owned(), 70.0, 16.0, WHITE),
        (format_number(sim.population()), 90.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Population: {percentage:.1}%"), 115.0, 14.0, LIGHTGRAY),
        (format!("Speed: {:.0} gen/s", sim.config.steps_per_second), 150.0, 14.0, LIGHTGRAY),
        (
            if sim.is_running { "Running" } else { "Paused" }.to_owned(),
            170.0,
            16.0,
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
        (format!("Step: {:.2}ms", sim.last_step_time_ms), 190.0, 12.0, GRAY),
        (format!("Render: {:.2}ms", sim.last_render_time_ms), 205.0, 12.0, GRAY),
    ];
    for (text, dy, size, color) in &labels {
        draw_text(text, x, STATS_Y + dy, *size, *color);
    }
    draw_population_bar(x, STATS_Y + 122.0, percentage);

    // Drawn last so the open menu covers everything else
    dropdown.draw(mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_suffixes() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12_500), "12.5K");
        assert_eq!(format_number(3_000_000), "3.0M");
    }

    #[test]
    fn captions_wrap_on_word_boundaries() {
        assert_eq!(
            caption_lines("Methuselah - stabilizes at gen 1103", 24),
            vec!["Methuselah - stabilizes", "at gen 1103"]
        );
        assert_eq!(caption_lines("  ", 10), Vec::<String>::new());
        assert_eq!(caption_lines("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
    }

    #[test]
    fn built_in_descriptions_fit_under_the_thumbnail() {
        for stamp in crate::domain::library().iter() {
            let lines = caption_lines(stamp.description(), CAPTION_CHARS);
            assert!((1..=2).contains(&lines.len()), "{}: {lines:?}", stamp.name());
            assert!(lines.iter().all(|line| line.chars().count() <= CAPTION_CHARS));
        }
    }
}
