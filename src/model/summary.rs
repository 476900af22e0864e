use crate::error::{Result, SmartChoiceError};
use crate::model::offer::Offer;

/// 首选推荐的挑选规则
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopPickRule {
    /// 取 smart score 最低的报价。
    /// 与分数本身的含义相反，保留现有行为，疑似缺陷。
    #[default]
    LowestScore,
    HighestScore,
}

impl TopPickRule {
    pub fn key(&self) -> &'static str {
        match self {
            TopPickRule::LowestScore => "lowest_score",
            TopPickRule::HighestScore => "highest_score",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        match key.trim() {
            "lowest_score" => Ok(TopPickRule::LowestScore),
            "highest_score" => Ok(TopPickRule::HighestScore),
            other => Err(SmartChoiceError::Config(format!("unknown top_pick '{}'", other))),
        }
    }

    /// 分数相同时取平台顺序靠前的那条
    pub fn pick<'a>(&self, offers: &'a [Offer]) -> Option<&'a Offer> {
        let mut best: Option<&Offer> = None;
        for offer in offers {
            let better = match best {
                None => true,
                Some(current) => match self {
                    TopPickRule::LowestScore => offer.smart_score() < current.smart_score(),
                    TopPickRule::HighestScore => offer.smart_score() > current.smart_score(),
                },
            };
            if better {
                best = Some(offer);
            }
        }
        best
    }
}

/// 对比面板的汇总指标
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonSummary {
    pub cheapest: u64,
    pub best_rating: f64,
    pub top_smart_score: f64,
    pub most_reviews: u64,
    pub top_pick: Offer,
}

impl ComparisonSummary {
    pub fn from_offers(offers: &[Offer], rule: TopPickRule) -> Option<Self> {
        let top_pick = rule.pick(offers)?.clone();
        Some(ComparisonSummary {
            cheapest: offers.iter().map(Offer::price).min()?,
            best_rating: offers.iter().map(Offer::rating).fold(f64::MIN, f64::max),
            top_smart_score: offers.iter().map(Offer::smart_score).fold(f64::MIN, f64::max),
            most_reviews: offers.iter().map(Offer::reviews).max()?,
            top_pick,
        })
    }
}
