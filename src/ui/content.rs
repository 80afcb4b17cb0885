//! Stock step content implementations.
//!
//! Hosts with custom bodies implement [`StepContent`] directly; these cover
//! the common wizard cases: a read-only panel, a single-line text form, and
//! a radio-style choice list.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::hierarchy::StepContent;
use crate::nav::NavHandle;

/// Read-only text panel. Consumes no keys; the wizard's own bindings drive
/// navigation from here.
pub struct InfoContent {
    lines: Vec<String>,
}

impl InfoContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            lines: text.into().lines().map(str::to_string).collect(),
        }
    }
}

impl StepContent for InfoContent {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Single-line text input with cursor editing.
///
/// Editing keys (characters, Backspace, Delete, Left/Right, Home/End) are
/// consumed; Enter submits and advances.
pub struct TextFormContent {
    title: String,
    prompt: String,
    value: String,
    cursor: usize,
    placeholder: String,
}

impl TextFormContent {
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl StepContent for TextFormContent {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Input box
                Constraint::Min(0),
            ])
            .split(area);

        let prompt = Paragraph::new(self.prompt.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, chunks[0]);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        if self.value.is_empty() {
            let hint = Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
        } else {
            frame.render_widget(Paragraph::new(self.value.as_str()), inner);
        }

        let cursor_x = inner.x + (self.cursor as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }

    fn handle_key(&mut self, key: KeyCode, nav: &mut NavHandle<'_>) -> bool {
        match key {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                true
            }
            KeyCode::Right => {
                if self.cursor < self.value.len() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            KeyCode::Enter => {
                nav.go_next();
                true
            }
            _ => false,
        }
    }
}

/// Radio-style selection from a fixed set of options.
pub struct ChoiceContent {
    prompt: String,
    options: Vec<(String, String)>,
    chosen: usize,
    state: ListState,
}

impl ChoiceContent {
    pub fn new(prompt: impl Into<String>, options: Vec<(&str, &str)>) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            prompt: prompt.into(),
            options: options
                .into_iter()
                .map(|(label, description)| (label.to_string(), description.to_string()))
                .collect(),
            chosen: 0,
            state,
        }
    }

    pub fn chosen_label(&self) -> Option<&str> {
        self.options.get(self.chosen).map(|(label, _)| label.as_str())
    }
}

impl StepContent for ChoiceContent {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(4)])
            .split(area);

        let prompt = Paragraph::new(self.prompt.as_str())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, (label, description))| {
                let is_chosen = index == self.chosen;
                let radio = if is_chosen { "(o)" } else { "( )" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            radio,
                            Style::default().fg(if is_chosen {
                                Color::Green
                            } else {
                                Color::DarkGray
                            }),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            label.clone(),
                            Style::default().add_modifier(Modifier::BOLD).fg(
                                if is_chosen {
                                    Color::White
                                } else {
                                    Color::Gray
                                },
                            ),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(description.clone(), Style::default().fg(Color::DarkGray)),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.state);
    }

    fn handle_key(&mut self, key: KeyCode, nav: &mut NavHandle<'_>) -> bool {
        let len = self.options.len();
        if len == 0 {
            return false;
        }
        match key {
            KeyCode::Down => {
                let i = self.state.selected().map_or(0, |i| (i + 1) % len);
                self.state.select(Some(i));
                true
            }
            KeyCode::Up => {
                let i = self
                    .state
                    .selected()
                    .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                self.state.select(Some(i));
                true
            }
            KeyCode::Char(' ') => {
                if let Some(i) = self.state.selected() {
                    self.chosen = i;
                }
                true
            }
            KeyCode::Enter => {
                if let Some(i) = self.state.selected() {
                    self.chosen = i;
                }
                nav.go_next();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{Hierarchy, MainStep, SubStep};
    use crate::nav::Navigator;

    struct Blank;

    impl StepContent for Blank {
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
    }

    fn navigator() -> Navigator {
        let hierarchy = Hierarchy::new(vec![
            MainStep::single("a", "A", SubStep::new("x", "X", Blank)),
            MainStep::single("b", "B", SubStep::new("y", "Y", Blank)),
        ])
        .unwrap();
        Navigator::new(&hierarchy)
    }

    #[test]
    fn test_text_form_edits_value() {
        let mut nav = navigator();
        let mut form = TextFormContent::new("Email", "", "you@example.com");

        for c in "ada@io".chars() {
            assert!(form.handle_key(KeyCode::Char(c), &mut nav.handle()));
        }
        form.handle_key(KeyCode::Backspace, &mut nav.handle());
        form.handle_key(KeyCode::Home, &mut nav.handle());
        form.handle_key(KeyCode::Delete, &mut nav.handle());

        assert_eq!(form.value(), "da@i");
        // Editing keys never navigate.
        assert_eq!(nav.position(), (0, 0));
    }

    #[test]
    fn test_text_form_enter_advances() {
        let mut nav = navigator();
        let mut form = TextFormContent::new("Email", "", "");

        assert!(form.handle_key(KeyCode::Enter, &mut nav.handle()));
        assert_eq!(nav.position(), (1, 0));
    }

    #[test]
    fn test_choice_enter_commits_highlight_and_advances() {
        let mut nav = navigator();
        let mut choice = ChoiceContent::new(
            "Role?",
            vec![("Engineer", ""), ("Operator", ""), ("Manager", "")],
        );

        choice.handle_key(KeyCode::Down, &mut nav.handle());
        choice.handle_key(KeyCode::Enter, &mut nav.handle());

        assert_eq!(choice.chosen_label(), Some("Operator"));
        assert_eq!(nav.position(), (1, 0));
    }

    #[test]
    fn test_choice_wraps_and_ignores_unbound_keys() {
        let mut nav = navigator();
        let mut choice = ChoiceContent::new("Role?", vec![("Engineer", ""), ("Operator", "")]);

        choice.handle_key(KeyCode::Up, &mut nav.handle());
        choice.handle_key(KeyCode::Char(' '), &mut nav.handle());
        assert_eq!(choice.chosen_label(), Some("Operator"));

        assert!(!choice.handle_key(KeyCode::Esc, &mut nav.handle()));
        assert_eq!(nav.position(), (0, 0));
    }
}
