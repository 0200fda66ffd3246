/// Language identifier outside the supported pair
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);
