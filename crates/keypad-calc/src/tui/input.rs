//! Terminal event handling
//!
//! Numbers are never typed from the keyboard: keys only move the keypad
//! focus, press the focused button, or quit. Mouse clicks press buttons
//! directly.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::keypad::FocusMove;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the keypad focus
    Focus(FocusMove),
    /// Press the focused button
    PressFocused,
    /// Left click at a terminal cell
    Click {
        /// Terminal column
        column: u16,
        /// Terminal row
        row: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Release and repeat events would press buttons twice on some platforms
        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Focus(FocusMove::Up),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Focus(FocusMove::Down),
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Focus(FocusMove::Left),
            KeyCode::Right | KeyCode::Char('l') => KeyAction::Focus(FocusMove::Right),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PressFocused,
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
