use crate::entity::sample_range::SampleRange;
use crate::error::{Result, SmartChoiceError};
use crate::model::catalog::{DEFAULT_KEY, PriceCatalog, PriceRow};
use crate::model::engine::{
    DEFAULT_RATING_RANGE, DEFAULT_REVIEWS_RANGE, InterestPolicy, RecommendationEngine,
};
use crate::model::platform::Platform;
use crate::model::summary::TopPickRule;
use crate::model::util::normalize_query;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use toml::{Table, Value};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 引擎配置，所有段都可省略，缺省时使用内置值
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub catalog: PriceCatalog,
    pub interest_policy: InterestPolicy,
    pub top_pick: TopPickRule,
    pub rating_range: SampleRange,
    pub reviews_range: SampleRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            catalog: PriceCatalog::default(),
            interest_policy: InterestPolicy::default(),
            top_pick: TopPickRule::default(),
            rating_range: DEFAULT_RATING_RANGE,
            reviews_range: DEFAULT_REVIEWS_RANGE,
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        info!(path = %path.display(), products = config.catalog.len(), "loaded config");
        if config.catalog.is_empty() {
            warn!(
                path = %path.display(),
                "no product rows configured, every query uses default prices"
            );
        }
        Ok(config)
    }

    /// 显式路径必须存在。未指定时尝试 ./config.toml，没有则用内置配置
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let value = contents.parse::<Table>()?;
        let mut config = EngineConfig::default();

        if let Some(policy) = value.get("interest_policy") {
            let key = expect_str(policy, "interest_policy")?;
            config.interest_policy = InterestPolicy::from_key(key)?;
        }

        if let Some(rule) = value.get("top_pick") {
            config.top_pick = TopPickRule::from_key(expect_str(rule, "top_pick")?)?;
        }

        if let Some(sampling) = value.get("sampling") {
            let (rating, reviews) =
                parse_sampling(sampling, config.rating_range, config.reviews_range)?;
            config.rating_range = rating;
            config.reviews_range = reviews;
        }

        if let Some(prices) = value.get("prices") {
            config.catalog = parse_prices(prices)?;
        }

        Ok(config)
    }

    pub fn engine(&self) -> RecommendationEngine {
        RecommendationEngine::new(self.catalog.clone(), self.interest_policy)
            .with_sampling(self.rating_range, self.reviews_range)
    }
}

fn expect_str<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| SmartChoiceError::Config(format!("'{}' must be a string", key)))
}

/// 整数和浮点都接受
fn expect_number(value: &Value, key: &str) -> Result<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|v| v as f64))
        .ok_or_else(|| SmartChoiceError::Config(format!("'{}' must be a number", key)))
}

fn parse_sampling(
    sampling: &Value,
    rating: SampleRange,
    reviews: SampleRange,
) -> Result<(SampleRange, SampleRange)> {
    let table = sampling
        .as_table()
        .ok_or_else(|| SmartChoiceError::Config("'sampling' must be a table".to_string()))?;

    let number_or = |key: &str, fallback: f64| -> Result<f64> {
        match table.get(key) {
            Some(v) => expect_number(v, key),
            None => Ok(fallback),
        }
    };

    let rating = SampleRange::new(
        number_or("rating_low", rating.low())?,
        number_or("rating_high", rating.high())?,
    )?;
    let reviews = SampleRange::new(
        number_or("reviews_low", reviews.low())?,
        number_or("reviews_high", reviews.high())?,
    )?;

    // 负评分会让 smart score 小于 0
    if rating.low() < 0.0 {
        return Err(SmartChoiceError::Config(format!(
            "rating range [{}, {}) must not be negative",
            rating.low(),
            rating.high()
        )));
    }
    // 评论数取对数，下限至少为 1
    if reviews.low() < 1.0 {
        return Err(SmartChoiceError::Config(format!(
            "reviews range [{}, {}) is invalid",
            reviews.low(),
            reviews.high()
        )));
    }
    Ok((rating, reviews))
}

fn parse_prices(prices: &Value) -> Result<PriceCatalog> {
    let table = prices
        .as_table()
        .ok_or_else(|| SmartChoiceError::Config("'prices' must be a table".to_string()))?;

    let mut rows = HashMap::new();
    let mut default_row = None;
    for (query, row_value) in table {
        let row = parse_row(query, row_value)?;
        if normalize_query(query) == DEFAULT_KEY {
            if default_row.replace(row).is_some() {
                return Err(SmartChoiceError::Config(format!(
                    "duplicate price row '{}'",
                    DEFAULT_KEY
                )));
            }
        } else {
            rows.insert(query.clone(), row);
        }
    }

    let default_row = default_row
        .ok_or_else(|| SmartChoiceError::Config("'prices.default' row is required".to_string()))?;
    PriceCatalog::new(rows, default_row)
}

fn parse_row(query: &str, value: &Value) -> Result<PriceRow> {
    let mut prices = [0u64; 3];
    for platform in Platform::ALL {
        let price = value
            .get(platform.key())
            .and_then(Value::as_integer)
            .ok_or_else(|| {
                SmartChoiceError::Config(format!(
                    "'prices.{}.{}' must be an integer",
                    query,
                    platform.key()
                ))
            })?;
        prices[platform.index()] = u64::try_from(price).map_err(|_| {
            SmartChoiceError::Config(format!(
                "'prices.{}.{}' must be positive",
                query,
                platform.key()
            ))
        })?;
    }
    Ok(PriceRow::new(prices[0], prices[1], prices[2]))
}
