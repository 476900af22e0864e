use std::fmt;

/// 三个零售平台，顺序固定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Platform {
    Amazon,
    Flipkart,
    Meesho,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Amazon, Platform::Flipkart, Platform::Meesho];

    /// 配置文件与 URL 中使用的键
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
            Platform::Meesho => "meesho",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Amazon => "AMAZON",
            Platform::Flipkart => "FLIPKART",
            Platform::Meesho => "MEESHO",
        }
    }

    pub fn brand(&self) -> &'static str {
        match self {
            Platform::Amazon => "Samsung",
            Platform::Flipkart => "Mi",
            Platform::Meesho => "BudgetPro",
        }
    }

    /// 占位图背景色
    pub fn color(&self) -> &'static str {
        match self {
            Platform::Amazon => "FF9900",
            Platform::Flipkart => "2874F0",
            Platform::Meesho => "FF6B6B",
        }
    }

    pub fn reason_template(&self) -> &'static str {
        match self {
            Platform::Amazon => "🚚 PREMIUM CHOICE - Prime delivery + easy returns",
            Platform::Flipkart => "💰 GREAT DEAL - Competitive pricing + fast delivery",
            Platform::Meesho => "🏆 BEST VALUE - Lowest price + high satisfaction",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Platform::Amazon => 0,
            Platform::Flipkart => 1,
            Platform::Meesho => 2,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
