use crate::core::{ChartRecord, ChartType};

/// Hand-maintained charts. An id already present in the generated data
/// replaces that chart in place.
#[must_use]
pub fn custom_overrides() -> Vec<ChartRecord> {
    vec![
        ChartRecord::new(
            "custom_growth",
            "Custom Growth Projection",
            ChartType::line(),
            ["2025", "2026", "2027", "2028"],
            vec![100.0, 140.0, 195.0, 250.0],
        ),
        ChartRecord::new(
            "weekly_signups",
            "New User Signups (Adjusted)",
            ChartType::bar(),
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            vec![80.0, 85.0, 72.0, 90.0, 100.0, 65.0, 60.0],
        ),
    ]
}
