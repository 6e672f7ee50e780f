use crate::layout::{CELL_RADIUS, CELL_SIZE, MONTH_LABEL_Y};
use crate::models::CalendarLayout;
use maud::{html, Markup};

const LEGEND_GAP: f64 = 5.0;

pub fn render_svg(layout: &CalendarLayout) -> String {
    calendar_markup(layout).into_string()
}

pub fn calendar_markup(layout: &CalendarLayout) -> Markup {
    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let legend = &layout.legend;
    let legend_transform = format!("translate({}, {})", legend.x, legend.y);
    let caption_y = CELL_SIZE - 1.0;
    let more_x = legend.swatches.len() as f64 * (CELL_SIZE + LEGEND_GAP) + LEGEND_GAP;

    html! {
        svg xmlns="http://www.w3.org/2000/svg" class="contribution-calendar"
            width=(layout.width) height=(layout.height) viewBox=(view_box)
            preserveAspectRatio="xMinYMin meet" {
            @for label in &layout.day_labels {
                text class="day-label" x=(label.x) y=(label.y) text-anchor="end" { (label.text) }
            }
            @for label in &layout.month_labels {
                text class="month-label" x=(label.x) y=(MONTH_LABEL_Y) { (label.month) }
            }
            @for cell in &layout.cells {
                rect class="contribution-cell" x=(cell.x) y=(cell.y)
                    width=(CELL_SIZE) height=(CELL_SIZE) rx=(CELL_RADIUS) fill=(cell.fill)
                    data-date=(cell.date.to_string()) data-count=(cell.count)
                    data-tooltip=(cell.tooltip) {
                    title { (cell.tooltip) }
                }
            }
            g class="legend" transform=(legend_transform) {
                @for swatch in &legend.swatches {
                    rect x=(swatch.x) width=(CELL_SIZE) height=(CELL_SIZE) rx=(CELL_RADIUS)
                        fill=(swatch.fill) {}
                }
                text class="legend-label" x="-35" y=(caption_y) { "Less" }
                text class="legend-label" x=(more_x) y=(caption_y) { "More" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_layout;
    use crate::models::{ContributionCalendar, ContributionRecord};
    use chrono::NaiveDate;

    fn two_days() -> CalendarLayout {
        build_layout(&ContributionCalendar {
            total: 5,
            records: vec![
                ContributionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 0),
                ContributionRecord::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 5),
            ],
        })
    }

    #[test]
    fn renders_one_rect_per_cell() {
        let svg = render_svg(&two_days());
        assert_eq!(svg.matches(r#"class="contribution-cell""#).count(), 2);
        assert!(svg.contains(r##"x="30" y="30" width="10.5" height="10.5" rx="2" fill="#ebedf0""##));
        assert!(svg.contains(r##"x="30" y="42.5" width="10.5" height="10.5" rx="2" fill="#40c463""##));
    }

    #[test]
    fn renders_labels_and_legend() {
        let svg = render_svg(&two_days());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="700" height="157.5" viewBox="0 0 700 157.5""#));
        assert!(svg.contains(r#"<text class="month-label" x="30" y="20">Jan</text>"#));
        assert!(svg.contains(">Mon</text>"));
        assert!(svg.contains(">Wed</text>"));
        assert!(svg.contains(">Fri</text>"));
        assert!(svg.contains(r#"transform="translate(582.5, 142.5)""#));
        assert!(svg.contains(">Less</text>"));
        assert!(svg.contains(r#"x="82.5" y="9.5">More</text>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn cell_carries_tooltip() {
        let svg = render_svg(&two_days());
        assert!(svg.contains("data-date=\"2024-01-02\" data-count=\"5\""));
        assert!(svg.contains("<title>Tuesday, January 2, 2024\n5 contributions</title>"));
    }

    #[test]
    fn label_text_is_escaped() {
        let mut layout = two_days();
        layout.month_labels[0].month = "<b>".to_string();
        let svg = render_svg(&layout);
        assert!(svg.contains(">&lt;b&gt;</text>"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn empty_layout_renders_frame_only() {
        let svg = render_svg(&build_layout(&ContributionCalendar::default()));
        assert!(!svg.contains("contribution-cell\""));
        assert_eq!(svg.matches("<rect").count(), 5);
    }

    #[test]
    fn rendering_is_idempotent() {
        let layout = two_days();
        assert_eq!(render_svg(&layout), render_svg(&layout));
    }
}
