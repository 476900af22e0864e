use crate::model::platform::Platform;

/// 某个平台上的一条合成报价，生成后不可变
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Offer {
    platform: Platform,
    name: String,
    price: u64,
    rating: f64,
    reviews: u64,
    smart_score: f64,
    reason: String,
    url: String,
    image: String,
}

impl Offer {
    #[allow(clippy::too_many_arguments)]
    pub fn from(
        platform: Platform,
        name: String,
        price: u64,
        rating: f64,
        reviews: u64,
        smart_score: f64,
        reason: String,
        url: String,
        image: String,
    ) -> Self {
        Offer {
            platform,
            name,
            price,
            rating,
            reviews,
            smart_score,
            reason,
            url,
            image,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn reviews(&self) -> u64 {
        self.reviews
    }

    pub fn smart_score(&self) -> f64 {
        self.smart_score
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from() {
        let offer = Offer::from(
            Platform::Meesho,
            "BudgetPro Shampoo Pro".to_string(),
            279,
            4.5,
            12000,
            19.1,
            "reason".to_string(),
            "https://meesho.com/shampoo".to_string(),
            "image".to_string(),
        );

        assert_eq!(offer.platform(), Platform::Meesho);
        assert_eq!(offer.name(), "BudgetPro Shampoo Pro");
        assert_eq!(offer.price(), 279);
        assert_eq!(offer.rating(), 4.5);
        assert_eq!(offer.reviews(), 12000);
        assert_eq!(offer.smart_score(), 19.1);
        assert_eq!(offer.reason(), "reason");
        assert_eq!(offer.url(), "https://meesho.com/shampoo");
        assert_eq!(offer.image(), "image");
    }
}
