//! TUI pane rendering
//!
//! - [`list`]: the scrollable bordered list every channel view is drawn with
//! - [`status`]: status bar with the run summary and keybindings
//!
//! The `*_items` builders turn pipeline results into styled list rows.

pub mod list;
pub mod status;

pub use list::render_list_pane;
pub use status::render_status_bar;

use crate::lexer::{BucketDump, NormalizedLine, Token};
use crate::parser::ParseOutcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Normalised lines, gutter-numbered with their physical source line
pub fn source_items(lines: &[NormalizedLine]) -> Vec<ListItem<'static>> {
    let width = lines
        .last()
        .map_or(1, |line| line.number.to_string().len());

    lines
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} │ ", line.number, width = width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(line.text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect()
}

/// Token report rows colored by category
pub fn token_items(tokens: &[Token]) -> Vec<ListItem<'static>> {
    tokens
        .iter()
        .map(|token| {
            let color = DEFAULT_THEME.category_color(token.category());
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<11}", token.category().label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(token.lexeme().to_string(), Style::default().fg(color)),
                Span::styled(
                    format!("  :{}", token.line()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect()
}

/// Reserved-table buckets
pub fn table_items(buckets: &[BucketDump<'_>]) -> Vec<ListItem<'static>> {
    buckets
        .iter()
        .map(|bucket| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("Index {:>2}: ", bucket.index),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(bucket.words.join(" "), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect()
}

/// Parse results, successes in green and mismatches in red
pub fn result_items(outcomes: &[ParseOutcome]) -> Vec<ListItem<'static>> {
    outcomes
        .iter()
        .map(|outcome| {
            let color = if outcome.is_success() {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.error
            };
            ListItem::new(outcome.to_string()).style(Style::default().fg(color))
        })
        .collect()
}
