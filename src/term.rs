//! Terminal backend abstraction (ambient stack; not named by the editing
//! core's own spec, but every `Editor` driving it needs one).
//!
//! Grounded on `examples/Monster0506-rift/src/term/mod.rs` and `src/term/
//! crossterm/mod.rs`: the `TerminalBackend` trait boundary and the
//! raw-mode/alternate-screen lifecycle are kept; colour and PTY-specific VT100
//! byte-sequence encoding are dropped since this crate draws one plain-text
//! buffer, not a syntax-highlighted one.

use crate::keymap::{KeyCode, Modifiers};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use std::io::{stdout, BufWriter, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyCode, Modifiers),
    Resize(u16, u16),
}

pub trait TerminalBackend {
    fn init(&mut self) -> Result<(), String>;
    fn deinit(&mut self);
    fn poll(&mut self, timeout: Duration) -> Result<bool, String>;
    fn read_event(&mut self) -> Result<Option<InputEvent>, String>;
    fn write(&mut self, bytes: &[u8]) -> Result<(), String>;
    fn flush(&mut self) -> Result<(), String>;
    fn get_size(&self) -> Result<Size, String>;
    fn clear_screen(&mut self) -> Result<(), String>;
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String>;
}

pub struct CrosstermBackend {
    writer: BufWriter<std::io::Stdout>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            writer: BufWriter::with_capacity(8192, stdout()),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        execute!(self.writer, terminal::EnterAlternateScreen)
            .map_err(|e| format!("failed to enter alternate screen: {e}"))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
        self.raw_mode_enabled = true;

        execute!(self.writer, cursor::Hide).map_err(|e| format!("failed to hide cursor: {e}"))?;
        self.writer.flush().map_err(|e| format!("failed to flush: {e}"))
    }

    fn deinit(&mut self) {
        let _ = execute!(self.writer, cursor::Show);
        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }
        if self.alternate_screen_enabled {
            let _ = execute!(self.writer, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = self.writer.flush();
    }

    fn poll(&mut self, timeout: Duration) -> Result<bool, String> {
        event::poll(timeout).map_err(|e| format!("failed to poll event: {e}"))
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>, String> {
        match event::read().map_err(|e| format!("failed to read event: {e}"))? {
            Event::Key(key_event) => Ok(translate_key_event(key_event)),
            Event::Resize(cols, rows) => Ok(Some(InputEvent::Resize(cols, rows))),
            _ => Ok(None),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), String> {
        self.writer.write_all(bytes).map_err(|e| format!("write failed: {e}"))
    }

    fn flush(&mut self) -> Result<(), String> {
        self.writer.flush().map_err(|e| format!("flush failed: {e}"))
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) = terminal::size().map_err(|e| format!("failed to get terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        execute!(self.writer, terminal::Clear(terminal::ClearType::All))
            .map_err(|e| format!("failed to clear screen: {e}"))?;
        execute!(self.writer, cursor::MoveTo(0, 0)).map_err(|e| format!("failed to move cursor: {e}"))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        execute!(self.writer, cursor::MoveTo(col, row)).map_err(|e| format!("failed to move cursor: {e}"))
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        self.deinit();
    }
}

fn translate_key_event(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let mods = key_event.modifiers;
    let mut modifiers = Modifiers::NONE;
    if mods.contains(KeyModifiers::CONTROL) {
        modifiers = modifiers | Modifiers::CTRL;
    }
    if mods.contains(KeyModifiers::SHIFT) {
        modifiers = modifiers | Modifiers::SHIFT;
    }
    if mods.contains(KeyModifiers::ALT) {
        modifiers = modifiers | Modifiers::ALT;
    }
    if mods.contains(KeyModifiers::SUPER) {
        modifiers = modifiers | Modifiers::SUPER;
    }

    let code = match key_event.code {
        event::KeyCode::Char(ch) => KeyCode::Char(ch),
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Esc => KeyCode::Escape,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Up => KeyCode::ArrowUp,
        event::KeyCode::Down => KeyCode::ArrowDown,
        event::KeyCode::Left => KeyCode::ArrowLeft,
        event::KeyCode::Right => KeyCode::ArrowRight,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Delete => KeyCode::Delete,
        _ => return None,
    };
    Some(InputEvent::Key(code, modifiers))
}
