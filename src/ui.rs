use crate::models::CalendarLayout;
use crate::svg::render_svg;
use maud::html;

pub fn render_index(username: &str, layout: &CalendarLayout) -> String {
    let username = html! { (username) }.into_string();
    INDEX_HTML
        .replace("{{USERNAME}}", &username)
        .replace("{{TOTAL}}", &layout.total_contributions.to_string())
        .replace("{{CALENDAR}}", &render_svg(layout))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{USERNAME}} contributions</title>
  <style>
    :root {
      --bg: #f6f8fa;
      --ink: #24292f;
      --muted: #57606a;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(36, 41, 47, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: 1.2rem;
      font-weight: 600;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    #contribution-calendar {
      overflow-x: auto;
    }

    .day-label,
    .month-label,
    .legend-label {
      font-size: 9px;
      fill: var(--muted);
    }

    .contribution-cell {
      outline: 1px solid rgba(27, 31, 35, 0.06);
      outline-offset: -1px;
    }

    .tooltip {
      position: absolute;
      pointer-events: none;
      padding: 6px 10px;
      border-radius: 6px;
      background: rgba(36, 41, 47, 0.92);
      color: #ffffff;
      font-size: 12px;
      white-space: pre-line;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    .tooltip.visible {
      opacity: 1;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{USERNAME}}</h1>
      <p class="subtitle"><span id="total">{{TOTAL}}</span> contributions in the last year</p>
    </header>
    <div id="contribution-calendar" data-user="{{USERNAME}}">
{{CALENDAR}}    </div>
  </main>
  <div class="tooltip" id="tooltip"></div>

  <script>
    const container = document.getElementById('contribution-calendar');
    const tooltip = document.getElementById('tooltip');
    const isTouchDevice = window.matchMedia('(pointer: coarse)').matches;
    let generation = 0;

    container.addEventListener('mouseover', (event) => {
      if (isTouchDevice) return;
      const cell = event.target.closest('.contribution-cell');
      if (!cell) return;
      tooltip.textContent = cell.dataset.tooltip;
      tooltip.style.left = `${event.pageX + 10}px`;
      tooltip.style.top = `${event.pageY - 28}px`;
      tooltip.classList.add('visible');
    });

    container.addEventListener('mouseout', (event) => {
      if (isTouchDevice) return;
      if (!event.target.closest('.contribution-cell')) return;
      tooltip.classList.remove('visible');
    });

    // Only the newest resize may replace the calendar; older responses are dropped.
    const rerender = async () => {
      generation += 1;
      const mine = generation;
      const user = encodeURIComponent(container.dataset.user);
      try {
        const res = await fetch(`/calendar.svg?user=${user}`);
        if (!res.ok) return;
        const svg = await res.text();
        if (mine !== generation) return;
        container.innerHTML = svg;
      } catch (err) {
        console.error('calendar refresh failed', err);
      }
    };

    window.addEventListener('resize', rerender);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_layout;
    use crate::models::{ContributionCalendar, ContributionRecord};
    use chrono::NaiveDate;

    #[test]
    fn page_embeds_calendar_and_total() {
        let layout = build_layout(&ContributionCalendar {
            total: 17,
            records: vec![ContributionRecord::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                17,
            )],
        });
        let html = render_index("octocat", &layout);

        assert!(html.contains("<h1>octocat</h1>"));
        assert!(html.contains(r#"<span id="total">17</span>"#));
        assert!(html.contains(r#"data-user="octocat""#));
        assert!(html.contains(&render_svg(&layout)));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn username_is_escaped() {
        let layout = build_layout(&ContributionCalendar::default());
        let html = render_index("<x>", &layout);
        assert!(html.contains("<h1>&lt;x&gt;</h1>"));
    }
}
