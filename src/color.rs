use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Empty,
    Low,
    Medium,
    High,
    Peak,
}

impl ColorBucket {
    pub fn fill(self) -> &'static str {
        match self {
            ColorBucket::Empty => "#ebedf0",
            ColorBucket::Low => "#9be9a8",
            ColorBucket::Medium => "#40c463",
            ColorBucket::High => "#30a14e",
            ColorBucket::Peak => "#216e39",
        }
    }
}

pub fn color_for(count: u64) -> ColorBucket {
    match count {
        0 => ColorBucket::Empty,
        1..=3 => ColorBucket::Low,
        4..=6 => ColorBucket::Medium,
        7..=9 => ColorBucket::High,
        _ => ColorBucket::Peak,
    }
}
