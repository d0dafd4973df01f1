//! Activity log panel: the most recent entries, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{App, LogEntry},
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct LogsComponent;

fn format_entry(entry: &LogEntry) -> String {
    format!("{} {}", entry.at.format("%H:%M:%S"), entry.message)
}

impl Component for LogsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Activity"), false);
        let visible = block.inner(rect).height as usize;

        let mut lines: Vec<Line> = app
            .logs
            .entries()
            .rev()
            .take(visible)
            .map(|entry| {
                let text = format_entry(entry);
                let (stamp, message) = text.split_at(8);
                Line::from(vec![
                    Span::styled(stamp.to_string(), theme.text_muted_style()),
                    Span::styled(message.to_string(), theme.text_primary_style()),
                ])
            })
            .collect();
        lines.reverse();

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn entries_are_prefixed_with_wall_clock_time() {
        let entry = LogEntry {
            at: Local.with_ymd_and_hms(2024, 5, 1, 9, 7, 3).unwrap(),
            message: "Generated \"Chat app\"".into(),
        };
        assert_eq!(format_entry(&entry), "09:07:03 Generated \"Chat app\"");
    }
}
