use crate::model::budget::BudgetRange;
use crate::model::interest::Interests;
use crate::model::offer::Offer;
use crate::model::summary::ComparisonSummary;
use crate::model::util::normalize_query;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

// 单次搜索的日志结构体
#[derive(Clone, Debug, PartialEq)]
pub struct SearchLog {
    pub timestamp: i64,
    pub session_id: String,
    pub query: String,        // 归一化后的查询词
    pub interests: Vec<String>,
    pub budget: String,
    pub offer_count: usize,
    pub top_pick_platform: Option<String>,
    pub top_pick_score: Option<f64>,
}

impl SearchLog {
    pub fn new(
        session_id: String,
        query: &str,
        interests: &Interests,
        budget: BudgetRange,
        offers: &[Offer],
        summary: Option<&ComparisonSummary>,
    ) -> Self {
        // 时钟早于 UNIX_EPOCH 时记为 0
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        SearchLog {
            timestamp,
            session_id,
            query: normalize_query(query),
            interests: interests.tags().into_iter().map(str::to_string).collect(),
            budget: budget.label().to_string(),
            offer_count: offers.len(),
            top_pick_platform: summary.map(|s| s.top_pick.platform().label().to_string()),
            top_pick_score: summary.map(|s| s.top_pick.smart_score()),
        }
    }

    pub fn emit(&self) {
        info!(
            timestamp = self.timestamp,
            session_id = %self.session_id,
            query = %self.query,
            interests = ?self.interests,
            budget = %self.budget,
            offer_count = self.offer_count,
            top_pick_platform = ?self.top_pick_platform,
            top_pick_score = ?self.top_pick_score,
            "search completed"
        );
    }
}
