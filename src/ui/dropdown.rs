use macroquad::prelude::*;

const FONT_SIZE: f32 = 16.0;

/// Dropdown selector that starts with nothing chosen
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: Option<usize>,
    placeholder: String,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: None,
            placeholder: placeholder.into(),
            is_open: false,
            label: label.into(),
        }
    }

    /// Text of the chosen item, if any
    pub fn selected_item(&self) -> Option<&str> {
        self.selected.map(|idx| self.items[idx].as_str())
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let (text, color) = match self.selected_item() {
            Some(item) => (item, WHITE),
            None => (self.placeholder.as_str(), LIGHTGRAY),
        };
        let display = truncate_to_width(text, self.width - 30.0);
        draw_text(&display, self.x + 5.0, self.y + 21.0, FONT_SIZE, color);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if self.selected == Some(i) {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                self.height,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            let display = truncate_to_width(item, self.width - 10.0);
            draw_text(&display, self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }
        self.is_open = false;

        match (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
            Some(i) if self.selected != Some(i) => {
                self.selected = Some(i);
                true
            }
            _ => false,
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}

/// Shorten `text` with an ellipsis until it fits `max_width` pixels
fn truncate_to_width(text: &str, max_width: f32) -> String {
    let fits = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width <= max_width;
    if fits(text) {
        return text.to_owned();
    }
    let mut truncated = text.to_owned();
    while !truncated.is_empty() && !fits(&format!("{truncated}...")) {
        truncated.pop();
    }
    format!("{truncated}...")
}
