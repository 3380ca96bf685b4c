//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the calculator column, keypad borders included
pub const CALCULATOR_WIDTH: u16 = 30;

/// Title on the outer border
pub const APP_TITLE: &str = " Keypad Calculator ";

/// One-line usage hint under the keypad
pub const HELP_TEXT: &str = "←↑↓→ move  ⏎ press  q quit";

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// The numeric display
    pub display: Rect,
    /// Pending operation or last error
    pub status: Rect,
    /// The keypad, borders included
    pub keypad: Rect,
    /// Usage hint
    pub help: Rect,
}

/// Splits the terminal area into calculator regions
#[must_use]
pub fn layout(area: Rect) -> CalculatorLayout {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CALCULATOR_WIDTH)])
        .flex(Flex::Center)
        .split(inner)[0];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(1), // Status
            Constraint::Min(12),   // Keypad
            Constraint::Length(1), // Help
        ])
        .split(column);

    CalculatorLayout {
        display: chunks[0],
        status: chunks[1],
        keypad: chunks[2],
        help: chunks[3],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .style(Style::default().bg(Color::Rgb(28, 28, 28))),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status_line();
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(status, style))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_display(regions.display, buf);
        self.render_status(regions.status, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(regions.help, buf);
    }
}
