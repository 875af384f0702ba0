use crate::interactive::ui::components::styles::Styles;
use crate::schemas::TrendingEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Horizontal strip of the most searched terms, ranked.
#[derive(Default)]
pub struct TrendingBar {
    entries: Vec<TrendingEntry>,
    is_loading: bool,
}

impl TrendingBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entries(&mut self, entries: Vec<TrendingEntry>) {
        self.entries = entries;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn line(&self) -> Line<'_> {
        if self.entries.is_empty() {
            let text = if self.is_loading {
                "Loading trending searches..."
            } else {
                "No searches yet"
            };
            return Line::from(Span::styled(text, Styles::dimmed()));
        }

        let mut spans = Vec::with_capacity(self.entries.len() * 3);
        for (rank, entry) in self.entries.iter().enumerate() {
            if rank > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{}.", rank + 1), Styles::label()));
            spans.push(Span::styled(
                format!(" {} ({})", entry.display_title(), entry.count),
                Styles::normal(),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let title = if self.is_loading && !self.entries.is_empty() {
            "Trending searches [refreshing...]"
        } else {
            "Trending searches"
        };
        let bar = Paragraph::new(self.line()).block(
            Block::default()
                .title(Span::styled(title, Styles::title()))
                .borders(Borders::ALL),
        );
        f.render_widget(bar, area);
    }
}
