use crate::algorithm::AlgorithmType;
use serde::Serialize;

/// JWT header structure
///
/// Serializes as `{"alg":"HS256","typ":"JWT"}`; field order is fixed.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: &'static str,

    /// Token type
    #[serde(rename = "typ")]
    pub token_type: &'static str,
}

impl TokenHeader {
    pub(crate) fn new(algorithm: AlgorithmType) -> Self {
        Self {
            algorithm: algorithm.as_str(),
            token_type: "JWT",
        }
    }
}
