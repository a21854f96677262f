use crate::enums::report_status::ReportStatus;
use crate::enums::report_type::ReportType;
use crate::shared::list_filter::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured business report and the state of its latest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Human-readable run cadence ("Daily", "Monthly", ...).
    pub cadence: String,
    pub status: ReportStatus,
    pub last_generated: DateTime<Utc>,
    pub size_label: String,
    pub file_format: String,
    pub metrics: Vec<String>,
}

impl Report {
    pub fn mark_generating(&mut self) {
        self.status = ReportStatus::Generating;
    }

    /// Finish a (simulated) run: stamp the completion time.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.status = ReportStatus::Completed;
        self.last_generated = now;
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Report {
        Report {
            id: "RPT-1".to_string(),
            name: "Sales Performance Report".to_string(),
            description: "Sales trends and performance metrics".to_string(),
            report_type: ReportType::Sales,
            cadence: "Monthly".to_string(),
            status: ReportStatus::Failed,
            last_generated: DateTime::UNIX_EPOCH,
            size_label: "2.4 MB".to_string(),
            file_format: "PDF".to_string(),
            metrics: vec!["Revenue".to_string(), "Orders".to_string()],
        }
    }

    #[test]
    fn regeneration_lifecycle() {
        let mut report = sample();
        report.mark_generating();
        assert_eq!(report.status, ReportStatus::Generating);

        let finished_at = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        report.mark_completed(finished_at);
        assert_eq!(report.status, ReportStatus::Completed);
        assert_eq!(report.last_generated, finished_at);
    }
}
