use crate::date::TIMEZONE;
use crate::surface::{CardGrid, StatusLine};

pub fn render_index(status: &StatusLine, grid: &CardGrid) -> String {
    INDEX_HTML
        .replace("{{TIMEZONE}}", TIMEZONE.name())
        .replace("{{STATUS}}", &status.to_html())
        .replace("{{GRID}}", &grid.to_html())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weeks</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status.is-error {
      color: #c63b2b;
    }

    .weeks-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
      gap: 16px;
    }

    .week-card {
      display: grid;
      gap: 10px;
      padding: 18px;
      border-radius: 18px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      color: inherit;
      text-decoration: none;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .week-card:hover {
      transform: translateY(-2px);
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.12);
    }

    .week-card.is-current {
      border: 2px solid var(--accent);
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .week-card__top {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
    }

    .week-card__label {
      font-weight: 600;
      font-size: 1.1rem;
      color: var(--accent-2);
    }

    .week-card__dates {
      font-size: 0.85rem;
      letter-spacing: 0.04em;
      color: #8b857d;
    }

    .badge {
      background: var(--accent);
      color: white;
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.75rem;
      font-weight: 600;
      white-space: nowrap;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weeks</h1>
      <p class="subtitle">The current week is picked by today's date in {{TIMEZONE}}.</p>
    </header>

    {{STATUS}}

    {{GRID}}
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RenderedCard, Status};
    use crate::surface::{GridSurface, StatusSurface};

    #[test]
    fn page_embeds_status_and_cards() {
        let mut status = StatusLine::default();
        status.set_status(&Status::info("Current week highlighted for 2024-01-10 (America/Chicago)."));
        let mut grid = CardGrid::default();
        grid.push_card(&RenderedCard {
            label: "Week 2".to_string(),
            href: "w2.html".to_string(),
            is_current: true,
            date_range: "2024-01-08–2024-01-14".to_string(),
        });

        let html = render_index(&status, &grid);
        assert!(html.contains("America/Chicago"));
        assert!(html.contains(r#"id="status""#));
        assert!(html.contains(r#"href="w2.html""#));
        assert!(!html.contains("{{"));
    }
}
