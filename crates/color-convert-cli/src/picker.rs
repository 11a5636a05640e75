//! Interactive format picker.
//!
//! A full-screen list drawn with ratatui on stderr, so stdout stays free for the converted
//! text. Keys: Up/Down (or k/j) move, 1-9 jump, Enter picks, Esc/q/Ctrl+C dismiss.

use color_convert::{COMMAND_TITLE, ColorFormat, FormatChoice, FormatChooser};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{self, Write, stderr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerAction {
    Continue,
    Picked(usize),
    Dismissed,
}

/// Cursor over a non-empty list of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PickerState {
    selected: usize,
    len: usize,
}

impl PickerState {
    fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        if key.kind != KeyEventKind::Press {
            return PickerAction::Continue;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PickerAction::Dismissed
            }
            KeyCode::Esc | KeyCode::Char('q') => PickerAction::Dismissed,
            KeyCode::Enter => PickerAction::Picked(self.selected),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(self.len - 1);
                PickerAction::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % self.len;
                PickerAction::Continue
            }
            KeyCode::Home => {
                self.selected = 0;
                PickerAction::Continue
            }
            KeyCode::End => {
                self.selected = self.len - 1;
                PickerAction::Continue
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(n) if n >= 1 && (n as usize) <= self.len => PickerAction::Picked(n as usize - 1),
                _ => PickerAction::Continue,
            },
            _ => PickerAction::Continue,
        }
    }
}

/// Puts the terminal into picker mode and restores it when dropped, including when setup
/// fails halfway.
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let mut guard = Self { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}

/// [`FormatChooser`] backed by a terminal UI.
#[derive(Debug, Clone)]
pub struct TerminalPicker {
    subtitle: String,
}

impl TerminalPicker {
    /// `subtitle` is shown in the list border, e.g. the file name and span count.
    pub fn new(subtitle: impl Into<String>) -> Self {
        Self {
            subtitle: subtitle.into(),
        }
    }

    fn render(&self, f: &mut Frame, choices: &[FormatChoice], state: &PickerState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let items = choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:<6}", choice.label),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(choice.description, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {COMMAND_TITLE} - {} ", self.subtitle)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(state.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let help = Paragraph::new("Up/Down: move  Enter: convert  1-9: pick  Esc: cancel")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[1]);
    }

    fn run_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        choices: &[FormatChoice],
    ) -> io::Result<Option<ColorFormat>> {
        let mut state = PickerState::new(choices.len());
        loop {
            terminal.draw(|f| self.render(f, choices, &state))?;

            if let Event::Key(key) = event::read()? {
                match state.handle_key(key) {
                    PickerAction::Continue => {}
                    PickerAction::Picked(i) => return Ok(Some(choices[i].format)),
                    PickerAction::Dismissed => return Ok(None),
                }
            }
        }
    }
}

impl FormatChooser for TerminalPicker {
    type Error = io::Error;

    fn choose(&mut self, choices: &[FormatChoice]) -> io::Result<Option<ColorFormat>> {
        if choices.is_empty() {
            return Ok(None);
        }

        let _guard = TerminalGuard::enter(stderr(), true)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;
        self.run_loop(&mut terminal, choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = PickerState::new(4);
        assert_eq!(state.handle_key(press(KeyCode::Up)), PickerAction::Continue);
        assert_eq!(state.selected, 3);
        state.handle_key(press(KeyCode::Down));
        assert_eq!(state.selected, 0);
        state.handle_key(press(KeyCode::Char('j')));
        state.handle_key(press(KeyCode::Char('j')));
        assert_eq!(state.handle_key(press(KeyCode::Enter)), PickerAction::Picked(2));
    }

    #[test]
    fn test_digits_pick_directly() {
        let mut state = PickerState::new(4);
        assert_eq!(
            state.handle_key(press(KeyCode::Char('4'))),
            PickerAction::Picked(3)
        );
        assert_eq!(
            state.handle_key(press(KeyCode::Char('5'))),
            PickerAction::Continue
        );
        assert_eq!(
            state.handle_key(press(KeyCode::Char('0'))),
            PickerAction::Continue
        );
    }

    #[test]
    fn test_dismiss_keys() {
        let mut state = PickerState::new(2);
        assert_eq!(state.handle_key(press(KeyCode::Esc)), PickerAction::Dismissed);
        assert_eq!(
            state.handle_key(press(KeyCode::Char('q'))),
            PickerAction::Dismissed
        );
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            PickerAction::Dismissed
        );
    }

    /// Fails the first write, then records everything.
    struct FailFirstWrite<'a> {
        failed: bool,
        written: &'a mut Vec<u8>,
    }

    impl Write for FailFirstWrite<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed {
                self.failed = true;
                return Err(io::Error::other("terminal went away"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_guard_restores_terminal_on_drop() {
        let mut written = Vec::new();
        drop(TerminalGuard::enter(&mut written, false).unwrap());

        let written = String::from_utf8(written).unwrap();
        assert!(written.starts_with("\x1b[?1049h"));
        assert!(written.ends_with(&format!("{LEAVE_ALTERNATE_SCREEN}{SHOW_CURSOR}")));
    }

    #[test]
    fn test_guard_restores_terminal_when_setup_fails() {
        let mut written = Vec::new();
        let out = FailFirstWrite {
            failed: false,
            written: &mut written,
        };
        assert!(TerminalGuard::enter(out, false).is_err());

        let written = String::from_utf8(written).unwrap();
        assert_eq!(written, format!("{LEAVE_ALTERNATE_SCREEN}{SHOW_CURSOR}"));
    }

    #[test]
    fn test_renders_every_choice() {
        use ratatui::backend::TestBackend;

        let picker = TerminalPicker::new("style.css");
        let choices = [
            FormatChoice {
                format: ColorFormat::Hex,
                label: "hex",
                description: "Hexadecimal",
            },
            FormatChoice {
                format: ColorFormat::Oklch,
                label: "oklch",
                description: "Perceptual",
            },
        ];
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| picker.render(f, &choices, &PickerState::new(2)))
            .unwrap();

        let screen = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(screen.contains("Convert Color - style.css"));
        assert!(screen.contains("hex"));
        assert!(screen.contains("oklch"));
        assert!(screen.contains("Esc: cancel"));
    }
}
