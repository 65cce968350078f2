use crate::core::{ChartCollection, ChartRecord, ChartType, SourceMeta};

pub const GENERATED_AT: &str = "2025-11-04T15:27:21.945Z";

const DESCRIPTION: &str = "Automated build dataset (merged from JSON + CSV sources)";
const JSON_SOURCE: &str = "https://cdn.jsdelivr.net/gh/Design-Inspis/chart-repo/chart-data.json";
const CSV_SOURCE: &str = "https://cdn.jsdelivr.net/gh/Design-Inspis/chart-repo/chart-data.csv";

#[must_use]
pub fn generated_dataset() -> ChartCollection {
    let mut source_meta = SourceMeta::new();
    source_meta.insert("jsonSource".to_owned(), JSON_SOURCE.to_owned());
    source_meta.insert("csvSource".to_owned(), CSV_SOURCE.to_owned());
    source_meta.insert("repoRef".to_owned(), "latest".to_owned());

    ChartCollection::new(
        GENERATED_AT,
        DESCRIPTION,
        vec![
            ChartRecord::new(
                "revenue_trend",
                "Monthly Revenue (USD)",
                ChartType::line(),
                ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                vec![12000.0, 13500.0, 12800.0, 15000.0, 17000.0, 16500.0],
            ),
            ChartRecord::new(
                "traffic_channels",
                "Website Traffic by Channel",
                ChartType::bar(),
                ["Organic", "Paid", "Referral", "Social", "Email"],
                vec![4200.0, 3100.0, 1800.0, 2600.0, 900.0],
            ),
            ChartRecord::new(
                "device_usage",
                "Device Usage Share (%)",
                ChartType::doughnut(),
                ["Desktop", "Mobile", "Tablet"],
                vec![52.0, 38.0, 10.0],
            ),
            ChartRecord::new(
                "weekly_signups",
                "New User Signups (Last 7 Days)",
                ChartType::bar(),
                ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                vec![75.0, 82.0, 69.0, 88.0, 95.0, 60.0, 54.0],
            ),
        ],
    )
    .with_source_meta(source_meta)
}
