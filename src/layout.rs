use crate::color::color_for;
use crate::models::{
    CalendarCell, CalendarLayout, ContributionCalendar, ContributionRecord, DayLabel,
    GridPosition, Legend, LegendSwatch, MonthLabel,
};
use chrono::{Datelike, NaiveDate};

pub const GRAPH_WIDTH: f64 = 700.0;
pub const CELL_SIZE: f64 = 10.5;
pub const CELL_PADDING: f64 = 2.0;
pub const WEEK_COUNT: usize = 53;
pub const DAY_COUNT: usize = 7;
pub const LABEL_WIDTH: f64 = 30.0;
pub const TOP_MARGIN: f64 = 30.0;
pub const MONTH_LABEL_Y: f64 = 20.0;
pub const CELL_RADIUS: f64 = 2.0;
/// Month labels at or past this offset would run into the legend.
pub const MONTH_LABEL_LIMIT: f64 = GRAPH_WIDTH - 25.0;

const CELL_STEP: f64 = CELL_SIZE + CELL_PADDING;
const MAX_CELLS: usize = WEEK_COUNT * DAY_COUNT;
const DAY_LABELS: [&str; 3] = ["Mon", "Wed", "Fri"];
const LEGEND_SAMPLES: [u64; 5] = [0, 3, 6, 9, 12];
const LEGEND_GAP: f64 = 5.0;

pub fn graph_height() -> f64 {
    CELL_STEP * DAY_COUNT as f64 + 70.0
}

/// Placement follows the record's index in the sequence, not its weekday:
/// the first record always lands in row 0.
pub fn grid_position(index: usize) -> GridPosition {
    GridPosition {
        column: index / DAY_COUNT,
        row: index % DAY_COUNT,
    }
}

pub fn cell_origin(position: GridPosition) -> (f64, f64) {
    (
        position.column as f64 * CELL_STEP + LABEL_WIDTH,
        position.row as f64 * CELL_STEP + TOP_MARGIN,
    )
}

/// Zero-fills skipped days, keeping only the newest `limit` entries.
/// Out-of-order and repeated dates are kept as given.
pub fn fill_gaps(records: &[ContributionRecord], limit: usize) -> Vec<ContributionRecord> {
    let mut filled: Vec<ContributionRecord> = Vec::with_capacity(limit.min(records.len()));
    for record in records.iter().rev() {
        if let Some(later) = filled.last().map(|next| next.date) {
            let mut previous = later.pred_opt();
            while let Some(date) = previous.filter(|date| *date > record.date) {
                if filled.len() == limit {
                    break;
                }
                filled.push(ContributionRecord::new(date, 0));
                previous = date.pred_opt();
            }
        }
        if filled.len() == limit {
            break;
        }
        filled.push(*record);
    }
    filled.reverse();
    filled
}

pub fn month_labels(records: &[ContributionRecord]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if record.date.day() != 1 {
            continue;
        }

        let month = month_abbreviation(record.date);
        if labels.iter().any(|label| label.month == month) {
            continue;
        }

        let (x, _) = cell_origin(grid_position(index));
        if x < MONTH_LABEL_LIMIT {
            labels.push(MonthLabel { month, x });
        }
    }
    labels
}

pub fn build_layout(calendar: &ContributionCalendar) -> CalendarLayout {
    let window = fill_gaps(&calendar.records, MAX_CELLS);

    let cells = window
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let position = grid_position(index);
            let (x, y) = cell_origin(position);
            let bucket = color_for(record.count);
            CalendarCell {
                date: record.date,
                count: record.count,
                position,
                x,
                y,
                bucket,
                fill: bucket.fill(),
                tooltip: tooltip_text(record),
            }
        })
        .collect();

    CalendarLayout {
        width: GRAPH_WIDTH,
        height: graph_height(),
        total_contributions: calendar.total,
        cells,
        month_labels: month_labels(&window),
        day_labels: day_labels(),
        legend: legend(),
    }
}

pub fn tooltip_text(record: &ContributionRecord) -> String {
    format!(
        "{}\n{} contributions",
        record.date.format("%A, %B %-d, %Y"),
        record.count
    )
}

fn month_abbreviation(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

fn day_labels() -> Vec<DayLabel> {
    DAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, &text)| DayLabel {
            text,
            x: LABEL_WIDTH - 5.0,
            y: CELL_STEP * (i * 2 + 1) as f64 + CELL_SIZE + TOP_MARGIN,
        })
        .collect()
}

fn legend() -> Legend {
    let swatch_step = CELL_SIZE + LEGEND_GAP;
    let x = GRAPH_WIDTH - LEGEND_SAMPLES.len() as f64 * swatch_step + LABEL_WIDTH - 70.0;
    let swatches = LEGEND_SAMPLES
        .iter()
        .enumerate()
        .map(|(i, &count)| LegendSwatch {
            x: i as f64 * swatch_step,
            count,
            fill: color_for(count).fill(),
        })
        .collect();

    Legend {
        x,
        y: graph_height() - 15.0,
        swatches,
    }
}
