//! Wizard screen: label rows, active step content, and event routing.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::hierarchy::{Hierarchy, MainStep, SubStep};
use crate::nav::Navigator;
use crate::ui::labels::{build_label, LabelBar, LabelDescriptor};

/// What the host loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardResult {
    /// Keep running
    Continue,
    /// The user asked to leave the wizard
    Quit,
}

/// Renders a wizard and routes input to its navigation operations.
///
/// The screen owns the validated [`Hierarchy`] and the [`Navigator`]; the
/// position is read back from the navigator every frame, never cached
/// here, so transitions are visible on the next draw.
pub struct WizardScreen {
    title: String,
    hierarchy: Hierarchy,
    nav: Navigator,
    main_bar: LabelBar,
    sub_bar: LabelBar,
}

impl WizardScreen {
    pub fn new(title: impl Into<String>, hierarchy: Hierarchy) -> Self {
        let nav = Navigator::new(&hierarchy);
        Self {
            title: title.into(),
            hierarchy,
            nav,
            main_bar: LabelBar::new(),
            sub_bar: LabelBar::new(),
        }
    }

    pub fn nav(&self) -> &Navigator {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut Navigator {
        &mut self.nav
    }

    pub fn position(&self) -> (usize, usize) {
        self.nav.position()
    }

    /// The active main step.
    pub fn current_main_step(&self) -> &MainStep {
        self.hierarchy.main(self.nav.active_main())
    }

    /// The active main step's sub steps.
    pub fn current_sub_steps(&self) -> &[SubStep] {
        self.current_main_step().subs()
    }

    /// Swap in a new hierarchy. The position resets to the first step and
    /// the completion callback carries over.
    pub fn replace_hierarchy(&mut self, hierarchy: Hierarchy) {
        let callback = self.nav.take_on_completed();
        let mut nav = Navigator::new(&hierarchy);
        nav.set_on_completed_boxed(callback);
        self.nav = nav;
        self.hierarchy = hierarchy;
        tracing::debug!("hierarchy replaced, position reset");
    }

    /// Draw the main label row, the sub label row (only when the active
    /// main step has more than one sub step), and the active content.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    self.title.clone(),
                    Style::default().fg(Color::LightRed),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let show_sub_bar = self.current_sub_steps().len() > 1;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Main labels
                Constraint::Length(if show_sub_bar { 1 } else { 0 }),
                Constraint::Length(1), // Spacer
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let (active_main, active_sub) = self.nav.position();

        let main_cells = self
            .hierarchy
            .mains()
            .iter()
            .enumerate()
            .map(|(index, main)| {
                build_label(&LabelDescriptor {
                    name: main.name(),
                    label: main.label(),
                    active: index == active_main,
                    visited: index < active_main,
                })
            })
            .collect();
        self.main_bar.render(frame, chunks[0], main_cells);

        if show_sub_bar {
            let sub_cells = self
                .current_sub_steps()
                .iter()
                .enumerate()
                .map(|(index, sub)| {
                    build_label(&LabelDescriptor {
                        name: sub.name(),
                        label: sub.label(),
                        active: index == active_sub,
                        visited: index < active_sub,
                    })
                })
                .collect();
            self.sub_bar.render(frame, chunks[1], sub_cells);
        } else {
            self.sub_bar.clear();
        }

        let step = self.hierarchy.sub_mut(active_main, active_sub);
        step.content.render(frame, chunks[3]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" next  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" section  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]));
        frame.render_widget(footer, chunks[4]);
    }

    /// Route a key press. The active step's content sees the key first;
    /// unconsumed keys fall through to the wizard's own bindings.
    pub fn handle_key(&mut self, key: KeyCode) -> WizardResult {
        let (active_main, active_sub) = self.nav.position();
        let step = self.hierarchy.sub_mut(active_main, active_sub);
        let mut handle = self.nav.handle();
        if step.content.handle_key(key, &mut handle) {
            return WizardResult::Continue;
        }

        match key {
            KeyCode::Enter | KeyCode::Right => {
                self.nav.go_next();
                WizardResult::Continue
            }
            KeyCode::Left => {
                self.nav.go_previous();
                WizardResult::Continue
            }
            KeyCode::Tab => {
                let next = self.nav.active_main() + 1;
                if next < self.nav.main_count() {
                    let name = self.hierarchy.main(next).name();
                    self.nav.jump_to_main(name);
                }
                WizardResult::Continue
            }
            KeyCode::BackTab => {
                if let Some(previous) = self.nav.active_main().checked_sub(1) {
                    let name = self.hierarchy.main(previous).name();
                    self.nav.jump_to_main(name);
                }
                WizardResult::Continue
            }
            KeyCode::Esc => {
                if self.nav.position() == (0, 0) {
                    WizardResult::Quit
                } else {
                    self.nav.go_previous();
                    WizardResult::Continue
                }
            }
            KeyCode::Char('q') => WizardResult::Quit,
            _ => WizardResult::Continue,
        }
    }

    /// Route a left-button mouse press. Clicks on label cells become jumps
    /// by step name; anything else is ignored.
    pub fn handle_mouse(&mut self, column: u16, row: u16) {
        if let Some(name) = self.main_bar.hit(column, row) {
            self.nav.jump_to_main(name);
            return;
        }
        if let Some(name) = self.sub_bar.hit(column, row) {
            self.nav.jump_to_sub(name);
        }
    }
}
