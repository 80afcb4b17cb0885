//! Step label rows with click hit regions.
//!
//! Labels are produced by an explicit builder: [`build_label`] turns a
//! [`LabelDescriptor`] into a styled cell, and [`LabelBar`] lays the cells
//! out on one row while recording where each cell landed. Activation is
//! name-based: a mouse click is resolved back to a step name with
//! [`LabelBar::hit`] and routed to the matching jump operation.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the " › " separator drawn between cells.
const CELL_GAP: u16 = 3;

/// Identity and display data for one step label.
pub struct LabelDescriptor<'a> {
    /// Step name the cell activates when clicked
    pub name: &'a str,
    /// Display text
    pub label: &'a str,
    /// Whether this is the active step
    pub active: bool,
    /// Whether this step sits before the active one in traversal order
    pub visited: bool,
}

/// A built label: the styled line plus the step name a click activates.
pub struct LabelCell {
    name: String,
    line: Line<'static>,
}

/// Build the renderable cell for one step label.
pub fn build_label(descriptor: &LabelDescriptor<'_>) -> LabelCell {
    let (text, style) = if descriptor.active {
        (
            format!("[{}]", descriptor.label),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else if descriptor.visited {
        (
            format!(" {} ", descriptor.label),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            format!(" {} ", descriptor.label),
            Style::default().fg(Color::DarkGray),
        )
    };

    LabelCell {
        name: descriptor.name.to_string(),
        line: Line::from(Span::styled(text, style)),
    }
}

/// One row of step labels with per-cell hit regions.
#[derive(Default)]
pub struct LabelBar {
    regions: Vec<(String, Rect)>,
}

impl LabelBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay cells out left to right on a single row, recording one hit
    /// region per rendered cell. Cells that do not fit in `area` are
    /// dropped along with their regions.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, cells: Vec<LabelCell>) {
        self.regions.clear();
        if area.height == 0 {
            return;
        }

        let mut x = area.x;
        for cell in cells {
            let width = cell.line.width() as u16;
            let gap = if self.regions.is_empty() { 0 } else { CELL_GAP };
            if width == 0 || x.saturating_add(gap).saturating_add(width) > area.right() {
                break;
            }

            if gap > 0 {
                frame.render_widget(
                    Paragraph::new(Span::styled(" › ", Style::default().fg(Color::DarkGray))),
                    Rect::new(x, area.y, gap, 1),
                );
                x += gap;
            }

            let rect = Rect::new(x, area.y, width, 1);
            frame.render_widget(Paragraph::new(cell.line), rect);
            self.regions.push((cell.name, rect));
            x += width;
        }
    }

    /// Resolve a click position to the step name rendered under it.
    pub fn hit(&self, column: u16, row: u16) -> Option<&str> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(name, _)| name.as_str())
    }

    /// Drop all recorded hit regions (used when the bar is not drawn this
    /// frame, so stale regions cannot catch clicks).
    pub fn clear(&mut self) {
        self.regions.clear();
    }
}
