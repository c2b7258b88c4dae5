use crate::date::TIMEZONE;
use crate::models::{DEFAULT_HREF, DEFAULT_LABEL, RenderedCard, Status, WeekRecord};
use crate::range::{format_range, in_range};
use crate::surface::{GridSurface, StatusSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub cards: Vec<RenderedCard>,
    pub status: Status,
}

impl RenderOutcome {
    pub fn has_current(&self) -> bool {
        self.cards.iter().any(|card| card.is_current)
    }

    /// Replaces whatever the surfaces showed before with this outcome.
    pub fn apply(&self, grid: &mut impl GridSurface, status: &mut impl StatusSurface) {
        grid.clear();
        for card in &self.cards {
            grid.push_card(card);
        }
        status.set_status(&self.status);
    }
}

/// Turns week records into cards, marking every record whose range holds `today`.
pub fn render_weeks(weeks: &[WeekRecord], today: &str) -> RenderOutcome {
    let cards: Vec<RenderedCard> = weeks.iter().map(|week| render_card(week, today)).collect();

    let status = if cards.iter().any(|card| card.is_current) {
        Status::info(format!("Current week highlighted for {today} ({TIMEZONE})."))
    } else {
        Status::info(format!("No current week match for {today} ({TIMEZONE})."))
    };

    RenderOutcome { cards, status }
}

fn render_card(week: &WeekRecord, today: &str) -> RenderedCard {
    let start = week.start_date.as_deref();
    let end = week.end_date.as_deref();
    let is_current = match (start, end) {
        (Some(start), Some(end)) => in_range(today, start, end),
        _ => false,
    };

    RenderedCard {
        label: week.label.clone().unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        href: week.href.clone().unwrap_or_else(|| DEFAULT_HREF.to_string()),
        is_current,
        date_range: format_range(start, end),
    }
}
