use std::fmt;
use tracing::warn;

/// 四个固定的预算档位
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BudgetRange {
    Under500,
    From500To5000,
    From5000To20000,
    Over20000,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Under500,
        BudgetRange::From500To5000,
        BudgetRange::From5000To20000,
        BudgetRange::Over20000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under500 => "<500",
            BudgetRange::From500To5000 => "500-5000",
            BudgetRange::From5000To20000 => "5000-20000",
            BudgetRange::Over20000 => ">20000",
        }
    }

    /// 宽松解析：无法识别的标签落入 `>20000` 档，只记一条 warn 日志
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "<500" => BudgetRange::Under500,
            "500-5000" => BudgetRange::From500To5000,
            "5000-20000" => BudgetRange::From5000To20000,
            ">20000" => BudgetRange::Over20000,
            other => {
                warn!(label = other, "unrecognized budget range, falling back to >20000");
                BudgetRange::Over20000
            }
        }
    }

    /// 边界值 500、5000、20000 均为闭区间
    pub fn contains(&self, price: u64) -> bool {
        match self {
            BudgetRange::Under500 => price < 500,
            BudgetRange::From500To5000 => (500..=5000).contains(&price),
            BudgetRange::From5000To20000 => (5000..=20000).contains(&price),
            BudgetRange::Over20000 => price > 20000,
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 按标签判断价格是否落在预算档位内
pub fn matches_budget(price: u64, budget_range: &str) -> bool {
    BudgetRange::from_label(budget_range).contains(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for range in BudgetRange::ALL {
            assert_eq!(BudgetRange::from_label(range.label()), range);
        }
    }

    #[test]
    fn test_under_500() {
        assert!(matches_budget(0, "<500"));
        assert!(matches_budget(279, "<500"));
        assert!(matches_budget(499, "<500"));
        assert!(!matches_budget(500, "<500"));
    }

    #[test]
    fn test_500_to_5000_inclusive() {
        assert!(!matches_budget(499, "500-5000"));
        assert!(matches_budget(500, "500-5000"));
        assert!(matches_budget(1999, "500-5000"));
        assert!(matches_budget(5000, "500-5000"));
        assert!(!matches_budget(5001, "500-5000"));
    }

    #[test]
    fn test_5000_to_20000_inclusive() {
        assert!(!matches_budget(4999, "5000-20000"));
        assert!(matches_budget(5000, "5000-20000"));
        assert!(matches_budget(12999, "5000-20000"));
        assert!(matches_budget(20000, "5000-20000"));
        assert!(!matches_budget(20001, "5000-20000"));
    }

    #[test]
    fn test_over_20000() {
        assert!(!matches_budget(20000, ">20000"));
        assert!(matches_budget(20001, ">20000"));
        assert!(matches_budget(45000, ">20000"));
    }

    #[test]
    fn test_unrecognized_label_falls_back() {
        assert_eq!(BudgetRange::from_label("cheap"), BudgetRange::Over20000);
        assert!(matches_budget(24999, "whatever"));
        assert!(!matches_budget(999, ""));
    }

    #[test]
    fn test_label_is_trimmed() {
        assert_eq!(BudgetRange::from_label(" <500 "), BudgetRange::Under500);
    }
}
