use crate::error::{Result, SmartChoiceError};
use crate::model::platform::Platform;
use crate::model::util::normalize_query;
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

pub const DEFAULT_KEY: &str = "default";

/// 单个查询词在三个平台上的价格
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRow {
    prices: [u64; 3],
}

impl PriceRow {
    pub fn new(amazon: u64, flipkart: u64, meesho: u64) -> Self {
        PriceRow {
            prices: [amazon, flipkart, meesho],
        }
    }

    pub fn price(&self, platform: Platform) -> u64 {
        self.prices[platform.index()]
    }
}

/// 查询词 -> 各平台价格的不可变映射，未收录的查询词使用 default 行
#[derive(Clone, Debug, PartialEq)]
pub struct PriceCatalog {
    rows: HashMap<String, PriceRow>,
    default_row: PriceRow,
}

lazy_static! {
    pub static ref BUILTIN_CATALOG: PriceCatalog = PriceCatalog::builtin();
}

impl PriceCatalog {
    /// 行键会被归一化，归一化后重复的键报错。价格必须为正
    pub fn new(rows: HashMap<String, PriceRow>, default_row: PriceRow) -> Result<Self> {
        let mut normalized = HashMap::with_capacity(rows.len());
        for (query, row) in rows {
            check_row(&query, &row)?;
            let key = normalize_query(&query);
            if normalized.insert(key.clone(), row).is_some() {
                return Err(SmartChoiceError::Config(format!("duplicate price row '{}'", key)));
            }
        }
        check_row(DEFAULT_KEY, &default_row)?;
        Ok(PriceCatalog {
            rows: normalized,
            default_row,
        })
    }

    fn builtin() -> Self {
        let rows = [
            ("shampoo", PriceRow::new(349, 299, 279)),
            ("laptop", PriceRow::new(45000, 42999, 41999)),
            ("kurta", PriceRow::new(899, 749, 699)),
            ("headphones", PriceRow::new(1999, 1799, 1699)),
            ("fridge", PriceRow::new(24999, 23999, 22999)),
            ("mobile", PriceRow::new(12999, 12499, 11999)),
            ("sneakers", PriceRow::new(2499, 2199, 1999)),
            ("watch", PriceRow::new(2999, 2699, 2499)),
            ("blender", PriceRow::new(1799, 1599, 1499)),
        ]
        .into_iter()
        .map(|(query, row)| (query.to_string(), row))
        .collect();

        PriceCatalog {
            rows,
            default_row: PriceRow::new(999, 899, 799),
        }
    }

    pub fn lookup(&self, query: &str) -> PriceRow {
        let key = normalize_query(query);
        match self.rows.get(&key) {
            Some(row) => *row,
            None => {
                debug!(query = %key, "query not in catalog, using default price row");
                self.default_row
            }
        }
    }

    pub fn default_row(&self) -> PriceRow {
        self.default_row
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        BUILTIN_CATALOG.clone()
    }
}

fn check_row(query: &str, row: &PriceRow) -> Result<()> {
    for platform in Platform::ALL {
        if row.price(platform) == 0 {
            return Err(SmartChoiceError::Config(format!(
                "price for '{}' on {} must be positive",
                query,
                platform.key()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shampoo() {
        let row = BUILTIN_CATALOG.lookup("shampoo");

        assert_eq!(row.price(Platform::Amazon), 349);
        assert_eq!(row.price(Platform::Flipkart), 299);
        assert_eq!(row.price(Platform::Meesho), 279);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let catalog = PriceCatalog::default();

        assert_eq!(catalog.lookup("  LaPtOp "), catalog.lookup("laptop"));
        assert_ne!(catalog.lookup("Fridge"), catalog.default_row());
    }

    #[test]
    fn test_unknown_query_uses_default_row() {
        let catalog = PriceCatalog::default();
        let row = catalog.lookup("xyz123");

        assert_eq!(row, PriceRow::new(999, 899, 799));
        assert_eq!(catalog.lookup(""), catalog.default_row());
    }

    #[test]
    fn test_custom_catalog() {
        let mut rows = HashMap::new();
        rows.insert("Desk Lamp".to_string(), PriceRow::new(650, 600, 550));
        let catalog = PriceCatalog::new(rows, PriceRow::new(10, 20, 30)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("desk lamp").price(Platform::Meesho), 550);
        assert_eq!(catalog.lookup("shampoo").price(Platform::Amazon), 10);
    }

    #[test]
    fn test_duplicate_normalized_key_rejected() {
        let mut rows = HashMap::new();
        rows.insert("Shampoo".to_string(), PriceRow::new(1, 1, 1));
        rows.insert(" shampoo ".to_string(), PriceRow::new(2, 2, 2));
        let result = PriceCatalog::new(rows, PriceRow::new(1, 1, 1));

        match result {
            Err(SmartChoiceError::Config(msg)) => assert_eq!(msg, "duplicate price row 'shampoo'"),
            other => panic!("expected duplicate row error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut rows = HashMap::new();
        rows.insert("free".to_string(), PriceRow::new(0, 1, 1));
        let result = PriceCatalog::new(rows, PriceRow::new(1, 1, 1));

        assert!(matches!(result, Err(SmartChoiceError::Config(_))));
    }
}
