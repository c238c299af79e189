use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Visit {
    pub id: Uuid,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub page_visited: String,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub country: Option<String>,
    pub city: Option<String>,
    pub referrer: Option<String>,
    pub device_type: Option<String>,
}

/// Reporting window for the visitor dashboard. Maps onto a start date;
/// everything from that date (inclusive) onwards is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    Month,
    Year,
}

impl Default for Period {
    fn default() -> Self {
        Period::Week
    }
}

impl Period {
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Period::Today => today,
            Period::Week => today - Duration::days(7),
            Period::Month => today - Duration::days(30),
            Period::Year => today - Duration::days(365),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub period: Period,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct RecentVisitor {
    pub ip_address: String,
    pub page_visited: String,
    pub device_type: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub visited_at: String,
}

impl From<Visit> for RecentVisitor {
    fn from(v: Visit) -> Self {
        let visited_at = format!(
            "{} {}",
            v.visit_date.format("%b %e, %Y"),
            v.visit_time.format("%H:%M")
        );
        RecentVisitor {
            ip_address: v.ip_address,
            page_visited: v.page_visited,
            device_type: v.device_type,
            country: v.country,
            city: v.city,
            visited_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VisitorAnalyticsResponse {
    pub period: Period,
    pub total_visits: i64,
    pub visits_by_date: Vec<DateBucket>,
    pub device_breakdown: Vec<LabelCount>,
    pub page_breakdown: Vec<LabelCount>,
    pub recent_visitors: Vec<RecentVisitor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_maps_to_start_date() {
        let today = day(2026, 3, 15);
        assert_eq!(Period::Today.start_date(today), today);
        assert_eq!(Period::Week.start_date(today), day(2026, 3, 8));
        assert_eq!(Period::Month.start_date(today), day(2026, 2, 13));
        assert_eq!(Period::Year.start_date(today), day(2025, 3, 15));
    }

    #[test]
    fn recent_visitor_formats_timestamp() {
        let visit = Visit {
            id: uuid::Uuid::new_v4(),
            ip_address: "203.0.113.9".into(),
            user_agent: None,
            page_visited: "/projects".into(),
            visit_date: day(2026, 1, 3),
            visit_time: NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
            country: Some("DE".into()),
            city: None,
            referrer: None,
            device_type: Some("mobile".into()),
        };
        let recent = RecentVisitor::from(visit);
        assert_eq!(recent.visited_at, "Jan  3, 2026 14:05");
    }

    #[test]
    fn period_defaults_to_week() {
        let query: AnalyticsQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.period, Period::Week);
    }
}
