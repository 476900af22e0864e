use thiserror::Error;

/// 边界层错误。评分引擎本身不会失败，
/// 只有输入解析和配置加载会返回错误。
#[derive(Debug, Error)]
pub enum SmartChoiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SmartChoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SmartChoiceError::InvalidInput("unknown interest 'cars'".to_string());
        assert_eq!(err.to_string(), "invalid input: unknown interest 'cars'");

        let err = SmartChoiceError::Config("missing default row".to_string());
        assert_eq!(err.to_string(), "configuration error: missing default row");
    }

    #[test]
    fn test_from_toml_error() {
        let parse_err = "prices = [".parse::<toml::Table>().unwrap_err();
        let err: SmartChoiceError = parse_err.into();
        assert!(matches!(err, SmartChoiceError::Toml(_)));
    }
}
