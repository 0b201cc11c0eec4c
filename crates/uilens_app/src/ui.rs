//! Renders the panel view model into terminal widgets.
//!
//! Three regions top to bottom: the results area (idle hint, loading
//! indicator, or the results body), the URL input field, and a status line.

use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use uilens_core::{PanelViewModel, SuggestionEntry};

pub fn render(frame: &mut Frame, view: &PanelViewModel) {
    let layout = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_results(frame, layout[0], view);
    render_input(frame, layout[1], view);
    render_status(frame, layout[2], view);
}

fn render_results(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let block = Block::default().borders(Borders::ALL).title(" Analysis ");

    if !view.results_visible {
        let hint = Paragraph::new("Enter a website URL below and press Enter to analyze it.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    if view.loading_visible {
        let loading = Paragraph::new("Analyzing website...")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(loading, area);
        return;
    }

    // Results body: detected elements on top, suggestions below.
    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    frame.render_widget(block, area);
    let body = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    render_elements(frame, body[0], view);
    render_suggestions(frame, body[1], view);
}

fn render_elements(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let items = view
        .detected_elements
        .iter()
        .map(|element| ListItem::new(element.as_str()));
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Detected Elements "),
    );
    frame.render_widget(list, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let mut lines = Vec::new();
    for entry in &view.suggestions {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        match entry {
            SuggestionEntry::Paragraph(text) => lines.push(Line::raw(text.as_str())),
            SuggestionEntry::Error(message) => lines.push(Line::styled(
                message.as_str(),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Suggestions "));
    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let border_color = if view.submit_enabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let input = Paragraph::new(view.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Website URL ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);

    // Cursor after the typed text, clamped to the field width.
    let max_x = area.x + area.width.saturating_sub(2);
    let cursor_x = (area.x + 1 + view.input.len() as u16).min(max_x);
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_status(frame: &mut Frame, area: Rect, view: &PanelViewModel) {
    let status = if view.loading_visible {
        "Analyzing... (Esc quits)"
    } else if view.submit_enabled {
        "Press Enter to analyze (Esc quits)"
    } else {
        "Type a website URL (Esc quits)"
    };
    let line = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}
