use crate::error::{Result, SmartChoiceError};
use std::fmt;
use std::str::FromStr;

/// 购物兴趣标签，词表固定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interest {
    Hairfall,
    Budget,
    Premium,
    Electronics,
    Fashion,
    Home,
    Gaming,
    General,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::Hairfall,
        Interest::Budget,
        Interest::Premium,
        Interest::Electronics,
        Interest::Fashion,
        Interest::Home,
        Interest::Gaming,
        Interest::General,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Interest::Hairfall => "hairfall",
            Interest::Budget => "budget",
            Interest::Premium => "premium",
            Interest::Electronics => "electronics",
            Interest::Fashion => "fashion",
            Interest::Home => "home",
            Interest::Gaming => "gaming",
            Interest::General => "general",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Interest {
    type Err = SmartChoiceError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        Interest::ALL
            .into_iter()
            .find(|interest| interest.tag() == tag)
            .ok_or_else(|| SmartChoiceError::InvalidInput(format!("unknown interest '{}'", s)))
    }
}

/// 按插入顺序去重的兴趣集合。推荐理由取第一个标签，所以顺序有意义。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interests {
    tags: Vec<Interest>,
}

impl Interests {
    pub fn new() -> Self {
        Interests { tags: Vec::new() }
    }

    /// 已存在的标签返回 false
    pub fn insert(&mut self, interest: Interest) -> bool {
        if self.tags.contains(&interest) {
            return false;
        }
        self.tags.push(interest);
        true
    }

    /// 解析一组原始标签，任何一个不在词表中即返回 InvalidInput
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut interests = Interests::new();
        for tag in raw {
            interests.insert(tag.as_ref().parse()?);
        }
        Ok(interests)
    }

    pub fn contains(&self, interest: Interest) -> bool {
        self.tags.contains(&interest)
    }

    pub fn first(&self) -> Option<Interest> {
        self.tags.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.tags.iter().map(Interest::tag).collect()
    }
}

impl FromIterator<Interest> for Interests {
    fn from_iter<T: IntoIterator<Item = Interest>>(iter: T) -> Self {
        let mut interests = Interests::new();
        for interest in iter {
            interests.insert(interest);
        }
        interests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!("budget".parse::<Interest>().unwrap(), Interest::Budget);
        assert_eq!(" Gaming ".parse::<Interest>().unwrap(), Interest::Gaming);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "cars".parse::<Interest>().unwrap_err();
        assert!(matches!(err, SmartChoiceError::InvalidInput(_)));
    }

    #[test]
    fn test_interests_keep_first_occurrence() {
        let interests = Interests::parse(["fashion", "budget", "fashion"]).unwrap();

        assert_eq!(interests.len(), 2);
        assert_eq!(interests.first(), Some(Interest::Fashion));
        assert_eq!(interests.tags(), vec!["fashion", "budget"]);
    }

    #[test]
    fn test_interests_parse_fails_fast() {
        let result = Interests::parse(["budget", "nope"]);
        assert!(matches!(result, Err(SmartChoiceError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_interests() {
        let interests = Interests::parse(Vec::<String>::new()).unwrap();

        assert!(interests.is_empty());
        assert_eq!(interests.first(), None);
    }

    #[test]
    fn test_from_iterator() {
        let interests: Interests = [Interest::Home, Interest::Home, Interest::Premium]
            .into_iter()
            .collect();

        assert_eq!(interests.len(), 2);
        assert!(interests.contains(Interest::Premium));
        assert!(!interests.contains(Interest::Budget));
    }
}
