use crate::entity::sample_range::SampleRange;
use crate::error::{Result, SmartChoiceError};
use crate::model::budget::BudgetRange;
use crate::model::catalog::PriceCatalog;
use crate::model::interest::{Interest, Interests};
use crate::model::offer::Offer;
use crate::model::platform::Platform;
use crate::model::util::{normalize_query, round_to_one_decimal, slugify, title_case};
use rand::Rng;

pub const DEFAULT_RATING_RANGE: SampleRange = SampleRange::from_bounds(4.2, 4.7);
pub const DEFAULT_REVIEWS_RANGE: SampleRange = SampleRange::from_bounds(5000.0, 30000.0);

const PRICE_SCORE_CEILING: f64 = 10.0;
const RATING_WEIGHT: f64 = 1.5;
const REVIEWS_WEIGHT: f64 = 0.8;
const REVIEWS_SCORE_CAP: f64 = 3.0;
const INTEREST_BONUS: f64 = 2.0;
const BUDGET_BONUS: f64 = 2.0;

/// 兴趣加分规则
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterestPolicy {
    /// 有任意兴趣即加 2 分，否则 0 分
    #[default]
    AnyInterest,
    /// 包含 budget 或 general 加 2 分，否则 1 分
    TagMatch,
}

impl InterestPolicy {
    pub fn key(&self) -> &'static str {
        match self {
            InterestPolicy::AnyInterest => "any_interest",
            InterestPolicy::TagMatch => "tag_match",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        match key.trim() {
            "any_interest" => Ok(InterestPolicy::AnyInterest),
            "tag_match" => Ok(InterestPolicy::TagMatch),
            other => Err(SmartChoiceError::Config(format!(
                "unknown interest_policy '{}'",
                other
            ))),
        }
    }

    pub fn score(&self, interests: &Interests) -> f64 {
        match self {
            InterestPolicy::AnyInterest => {
                if interests.is_empty() {
                    0.0
                } else {
                    INTEREST_BONUS
                }
            }
            InterestPolicy::TagMatch => {
                if interests.contains(Interest::Budget) || interests.contains(Interest::General) {
                    INTEREST_BONUS
                } else {
                    1.0
                }
            }
        }
    }
}

/// 价格越低分越高，下限为 0
pub fn price_score(price: u64) -> f64 {
    (PRICE_SCORE_CEILING - price as f64 / 1000.0).max(0.0)
}

/// 下限为 0
pub fn rating_score(rating: f64) -> f64 {
    (rating * RATING_WEIGHT).max(0.0)
}

/// 评论数的边际收益递减，上限 3 分
pub fn reviews_score(reviews: u64) -> f64 {
    if reviews == 0 {
        return 0.0;
    }
    ((reviews as f64).log10() * REVIEWS_WEIGHT).min(REVIEWS_SCORE_CAP)
}

pub fn budget_score(price: u64, budget: BudgetRange) -> f64 {
    if budget.contains(price) { BUDGET_BONUS } else { 0.0 }
}

/// 各项得分明细
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub price: f64,
    pub rating: f64,
    pub reviews: f64,
    pub interest: f64,
    pub budget: f64,
}

impl ScoreBreakdown {
    pub fn compute(
        price: u64,
        rating: f64,
        reviews: u64,
        interests: &Interests,
        budget: BudgetRange,
        policy: InterestPolicy,
    ) -> Self {
        ScoreBreakdown {
            price: price_score(price),
            rating: rating_score(rating),
            reviews: reviews_score(reviews),
            interest: policy.score(interests),
            budget: budget_score(price, budget),
        }
    }

    /// 合计并保留一位小数
    pub fn smart_score(&self) -> f64 {
        let total = self.price + self.rating + self.reviews + self.interest + self.budget;
        round_to_one_decimal(total)
    }
}

/// 推荐引擎：价格表、兴趣规则和两个采样区间。本身无状态，随机源由调用方注入。
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationEngine {
    catalog: PriceCatalog,
    interest_policy: InterestPolicy,
    rating_range: SampleRange,
    reviews_range: SampleRange,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        RecommendationEngine::new(PriceCatalog::default(), InterestPolicy::default())
    }
}

impl RecommendationEngine {
    pub fn new(catalog: PriceCatalog, interest_policy: InterestPolicy) -> Self {
        RecommendationEngine {
            catalog,
            interest_policy,
            rating_range: DEFAULT_RATING_RANGE,
            reviews_range: DEFAULT_REVIEWS_RANGE,
        }
    }

    pub fn with_sampling(mut self, rating_range: SampleRange, reviews_range: SampleRange) -> Self {
        self.rating_range = rating_range;
        self.reviews_range = reviews_range;
        self
    }

    pub fn interest_policy(&self) -> InterestPolicy {
        self.interest_policy
    }

    pub fn rating_range(&self) -> SampleRange {
        self.rating_range
    }

    pub fn reviews_range(&self) -> SampleRange {
        self.reviews_range
    }

    /// 每个平台生成一条报价，顺序与 `Platform::ALL` 一致。
    /// 未收录的查询词使用默认价格行，永不失败。
    pub fn compute_offers<R: Rng + ?Sized>(
        &self,
        query: &str,
        interests: &Interests,
        budget: BudgetRange,
        rng: &mut R,
    ) -> Vec<Offer> {
        let query = normalize_query(query);
        let row = self.catalog.lookup(&query);

        Platform::ALL
            .iter()
            .map(|&platform| {
                let price = row.price(platform);
                let rating = round_to_one_decimal(self.rating_range.sample(rng));
                let reviews = self.reviews_range.sample(rng).trunc() as u64;

                let smart_score = ScoreBreakdown::compute(
                    price,
                    rating,
                    reviews,
                    interests,
                    budget,
                    self.interest_policy,
                )
                .smart_score();

                Offer::from(
                    platform,
                    offer_name(platform, &query),
                    price,
                    rating,
                    reviews,
                    smart_score,
                    offer_reason(platform, interests),
                    offer_url(platform, &query),
                    offer_image(platform, &query),
                )
            })
            .collect()
    }
}

/// 使用内置价格表和默认规则
pub fn compute_offers<R: Rng + ?Sized>(
    query: &str,
    interests: &Interests,
    budget: BudgetRange,
    rng: &mut R,
) -> Vec<Offer> {
    RecommendationEngine::default().compute_offers(query, interests, budget, rng)
}

fn offer_name(platform: Platform, query: &str) -> String {
    format!("{} {} Pro", platform.brand(), title_case(query))
}

fn offer_reason(platform: Platform, interests: &Interests) -> String {
    let matched = interests.first().map(|i| i.tag()).unwrap_or("needs");
    format!("{} | Matches your {}", platform.reason_template(), matched)
}

fn offer_url(platform: Platform, query: &str) -> String {
    format!("https://{}.com/{}", platform.key(), slugify(query))
}

fn offer_image(platform: Platform, query: &str) -> String {
    format!(
        "https://via.placeholder.com/300x200/{}/FFFFFF?text={}",
        platform.color(),
        query.to_uppercase()
    )
}
