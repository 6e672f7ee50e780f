use crate::color::ColorBucket;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub date: NaiveDate,
    pub count: u64,
}

impl ContributionRecord {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub total: u64,
    pub records: Vec<ContributionRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridPosition {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLabel {
    pub month: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub count: u64,
    pub position: GridPosition,
    pub x: f64,
    pub y: f64,
    pub bucket: ColorBucket,
    pub fill: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLabel {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub x: f64,
    pub count: u64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub swatches: Vec<LegendSwatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarLayout {
    pub width: f64,
    pub height: f64,
    pub total_contributions: u64,
    pub cells: Vec<CalendarCell>,
    pub month_labels: Vec<MonthLabel>,
    pub day_labels: Vec<DayLabel>,
    pub legend: Legend,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub user: Option<String>,
}
