//! Keypad grid for the terminal front-end
//!
//! The 20 buttons are laid out 5x4 in the classic pocket calculator order.
//! Buttons can be clicked with the mouse, or focused with the arrow keys and
//! activated with Enter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Operation, Token};

/// Visual grouping of a button, used for theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonGroup {
    /// Top row functions: AC, +/-, %
    Function,
    /// Right column: ÷ × - + =
    Operator,
    /// Digits, the decimal point and √
    Digit,
}

impl ButtonGroup {
    /// Returns the group a token's button belongs to
    #[must_use]
    pub const fn of(token: Token) -> Self {
        match token {
            Token::AllClear | Token::Negate | Token::Percent => Self::Function,
            Token::Operator(_) | Token::Equals => Self::Operator,
            Token::Digit(_) | Token::Decimal | Token::SquareRoot => Self::Digit,
        }
    }

    /// Returns the idle style of buttons in this group
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Function => Style::default()
                .fg(Color::Rgb(28, 28, 28))
                .bg(Color::Rgb(212, 212, 210)),
            Self::Operator => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(255, 149, 0)),
            Self::Digit => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(80, 80, 80)),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The token sent when the button is activated
    pub token: Token,
    /// Theming group
    pub group: ButtonGroup,
    /// Whether the button is currently highlighted as pressed
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for a token
    #[must_use]
    pub const fn new(token: Token) -> Self {
        Self {
            token,
            group: ButtonGroup::of(token),
            pressed: false,
        }
    }

    /// Returns the button caption
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.token.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// Direction for keyboard focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One column left
    Left,
    /// One column right
    Right,
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ AC] [+/-] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ √ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
    /// Index of the keyboard-focused button
    focus: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad, focused on `0`
    #[must_use]
    pub fn new() -> Self {
        let buttons: Vec<_> = Token::ALL.into_iter().map(KeypadButton::new).collect();
        let focus = buttons
            .iter()
            .position(|b| b.token == Token::ZERO)
            .unwrap_or(0);
        Self {
            buttons,
            cols: 4,
            rows: 5,
            focus,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its caption
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Finds the button that sends a token
    #[must_use]
    pub fn find_button_by_token(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for a token
    pub fn highlight_token(&mut self, token: Token) {
        self.release_all();
        if let Some(idx) = self.find_button_by_token(token) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Returns the index of the focused button
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused button
    #[must_use]
    pub fn focused_button(&self) -> Option<&KeypadButton> {
        self.buttons.get(self.focus)
    }

    /// Focuses a button by index; out of range indices are ignored
    pub fn set_focus(&mut self, index: usize) {
        if index < self.buttons.len() {
            self.focus = index;
        }
    }

    /// Moves the focus one step, wrapping around the grid edges
    pub fn move_focus(&mut self, direction: FocusMove) {
        let (row, col) = (self.focus / self.cols, self.focus % self.cols);
        let (row, col) = match direction {
            FocusMove::Up => ((row + self.rows - 1) % self.rows, col),
            FocusMove::Down => ((row + 1) % self.rows, col),
            FocusMove::Left => (row, (col + self.cols - 1) % self.cols),
            FocusMove::Right => (row, (col + 1) % self.cols),
        };
        self.focus = row * self.cols + col;
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border takes one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the operator buttons in column order
    #[must_use]
    pub fn operator_buttons(&self) -> Vec<&KeypadButton> {
        Operation::ALL
            .iter()
            .filter_map(|op| {
                self.find_button_by_token(Token::Operator(*op))
                    .and_then(|i| self.buttons.get(i))
            })
            .collect()
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for (index, ((row, col), btn)) in self.keypad.buttons_with_positions().enumerate() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let mut style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                btn.group.style()
            };
            if index == self.keypad.focus {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let cell = Rect::new(x, y, btn_width, btn_height);
            buf.set_style(cell, style);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_len = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_len) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
