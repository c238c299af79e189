use chrono::Utc;

use crate::{
    constants::RECENT_VISITORS_LIMIT,
    entities::visit::{Period, RecentVisitor, VisitorAnalyticsResponse},
    errors::AppError,
    repositories::visits::VisitRepository,
};

pub struct VisitorAnalyticsHandler<R>
where
    R: VisitRepository,
{
    pub visit_repo: R,
}

impl<R> VisitorAnalyticsHandler<R>
where
    R: VisitRepository,
{
    pub fn new(visit_repo: R) -> Self {
        VisitorAnalyticsHandler { visit_repo }
    }

    /// Aggregates the visit log for the requested period. Every
    /// projection applies the same start-date filter.
    pub async fn visitor_analytics(&self, period: Period) -> Result<VisitorAnalyticsResponse, AppError> {
        let since = period.start_date(Utc::now().date_naive());

        let total_visits = self.visit_repo.count_visits_since(since).await?;
        let visits_by_date = self.visit_repo.visits_by_date(since).await?;
        let device_breakdown = self.visit_repo.visits_by_device(since).await?;
        let page_breakdown = self.visit_repo.visits_by_page(since).await?;
        let recent_visitors = self
            .visit_repo
            .recent_visitors(since, RECENT_VISITORS_LIMIT)
            .await?
            .into_iter()
            .map(RecentVisitor::from)
            .collect();

        Ok(VisitorAnalyticsResponse {
            period,
            total_visits,
            visits_by_date,
            device_breakdown,
            page_breakdown,
            recent_visitors,
        })
    }
}
