//! Places the loader writes to: one status line and one grid of week cards.

use crate::models::{RenderedCard, Status};

pub trait StatusSurface {
    fn set_status(&mut self, status: &Status);
}

pub trait GridSurface {
    fn clear(&mut self);
    fn push_card(&mut self, card: &RenderedCard);
}

impl<T: StatusSurface + ?Sized> StatusSurface for &mut T {
    fn set_status(&mut self, status: &Status) {
        (**self).set_status(status);
    }
}

impl<T: GridSurface + ?Sized> GridSurface for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn push_card(&mut self, card: &RenderedCard) {
        (**self).push_card(card);
    }
}

/// Status line of the page. Shows the latest status and remembers earlier ones.
#[derive(Debug, Default)]
pub struct StatusLine {
    status: Status,
    history: Vec<Status>,
}

impl StatusLine {
    pub fn current(&self) -> &Status {
        &self.status
    }

    /// Every status set so far, oldest first.
    pub fn history(&self) -> &[Status] {
        &self.history
    }

    pub fn to_html(&self) -> String {
        let class = if self.status.is_error() {
            "status is-error"
        } else {
            "status"
        };
        format!(
            r#"<div class="{class}" id="status" role="status">{}</div>"#,
            html_escape(&self.status.message)
        )
    }
}

impl StatusSurface for StatusLine {
    fn set_status(&mut self, status: &Status) {
        self.status = status.clone();
        self.history.push(status.clone());
    }
}

#[derive(Debug, Default)]
pub struct CardGrid {
    cards: Vec<RenderedCard>,
}

impl CardGrid {
    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<RenderedCard> {
        self.cards
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="weeks-grid" id="weeksGrid">"#);
        for card in &self.cards {
            html.push_str(&card_html(card));
        }
        html.push_str("</div>");
        html
    }
}

impl GridSurface for CardGrid {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn push_card(&mut self, card: &RenderedCard) {
        self.cards.push(card.clone());
    }
}

fn card_html(card: &RenderedCard) -> String {
    let (class, aria) = if card.is_current {
        ("week-card is-current", r#" aria-current="true""#)
    } else {
        ("week-card", "")
    };
    let badge = card
        .badge()
        .map(|text| format!(r#"<span class="badge">{text}</span>"#))
        .unwrap_or_default();

    format!(
        r#"<a class="{class}" href="{href}" role="button"{aria}><div class="week-card__top"><div class="week-card__label">{label}</div>{badge}</div><div class="week-card__dates">{dates}</div></a>"#,
        href = html_escape(&card.href),
        label = html_escape(&card.label),
        dates = html_escape(&card.date_range),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
