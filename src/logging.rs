mod search_log;

pub use crate::logging::search_log::SearchLog;
use crate::model::budget::BudgetRange;
use crate::model::interest::Interests;
use crate::model::offer::Offer;
use crate::model::summary::ComparisonSummary;
use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing_subscriber::EnvFilter;

/// 安装全局 tracing subscriber，默认级别 info，可由 RUST_LOG 覆盖。
/// 重复调用返回错误而不是 panic。
pub fn init_logger(json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// 16 位随机字母数字
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

// 搜索日志记录器，一个会话一个
pub struct Logger {
    session_id: String,
}

impl Logger {
    pub fn new(session_id: String) -> Self {
        Logger { session_id }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn log_search(
        &self,
        query: &str,
        interests: &Interests,
        budget: BudgetRange,
        offers: &[Offer],
        summary: Option<&ComparisonSummary>,
    ) -> SearchLog {
        let log = SearchLog::new(
            self.session_id.clone(),
            query,
            interests,
            budget,
            offers,
            summary,
        );
        log.emit();
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::engine::compute_offers;
    use crate::model::summary::TopPickRule;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_session_id() {
        let id = generate_session_id();

        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id, generate_session_id());
    }

    #[test]
    fn test_logger_log_search() {
        let logger = Logger::new("session_b".to_string());
        assert_eq!(logger.session_id(), "session_b");

        let interests = Interests::parse(["budget"]).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let offers = compute_offers("shampoo", &interests, BudgetRange::Under500, &mut rng);
        let summary = ComparisonSummary::from_offers(&offers, TopPickRule::LowestScore);

        let log = logger.log_search(
            "shampoo",
            &interests,
            BudgetRange::Under500,
            &offers,
            summary.as_ref(),
        );

        assert_eq!(log.session_id, "session_b");
        assert_eq!(log.offer_count, 3);
        assert!(log.top_pick_platform.is_some());
    }

    #[test]
    fn test_init_logger_twice() {
        // 第一次可能因其他测试已安装而失败，第二次一定失败
        let _ = init_logger(false);
        assert!(init_logger(false).is_err());
    }
}
