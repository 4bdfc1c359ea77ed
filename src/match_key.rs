use serde_json::Value;
use tracing::warn;

use crate::error::ExportError;

/// Join columns stamped onto every emitted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchKey {
    pub match_id: String,
    pub match_number: Option<u64>,
}

impl MatchKey {
    pub fn new(match_id: impl Into<String>) -> Self {
        let match_id = match_id.into();
        let match_number = extract_match_number(&match_id);
        Self {
            match_id,
            match_number,
        }
    }
}

/// Parses the maximal run of ASCII digits at the end of `match_id`
/// (`KR_123456` -> `123456`). Returns `None` when the id has no trailing
/// digits or the run does not fit in a `u64`.
pub fn extract_match_number(match_id: &str) -> Option<u64> {
    let prefix_len = match_id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &match_id[prefix_len..];
    if digits.is_empty() {
        return None;
    }

    match digits.parse::<u64>() {
        Ok(number) => Some(number),
        Err(err) => {
            warn!(match_id, %err, "trailing match number does not fit in u64");
            None
        }
    }
}

/// Splits a timeline document into its single match id and match body.
pub fn split_document(document: &Value) -> Result<(MatchKey, &Value), ExportError> {
    let Some(root) = document.as_object() else {
        return Err(ExportError::NotAnObject);
    };

    if root.len() != 1 {
        return Err(ExportError::MatchCount(root.len()));
    }

    let Some((match_id, body)) = root.iter().next() else {
        return Err(ExportError::MatchCount(0));
    };

    Ok((MatchKey::new(match_id.as_str()), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::region_prefix("KR_123456", Some(123456))]
    #[case::no_digits("NA1_", None)]
    #[case::digits_only("77", Some(77))]
    #[case::leading_zeros("EUW1_0042", Some(42))]
    #[case::empty("", None)]
    #[case::digits_not_trailing("12AB", None)]
    #[case::overflow("KR_99999999999999999999999", None)]
    fn trailing_digits_become_match_number(#[case] id: &str, #[case] expected: Option<u64>) {
        assert_eq!(extract_match_number(id), expected);
    }

    #[test]
    fn non_ascii_prefix_is_preserved() {
        assert_eq!(extract_match_number("경기_15"), Some(15));
    }

    #[test]
    fn split_document_returns_the_only_key() {
        let doc = json!({ "KR_7": { "info": {} } });
        let (key, body) = split_document(&doc).expect("single match");
        assert_eq!(key.match_id, "KR_7");
        assert_eq!(key.match_number, Some(7));
        assert_eq!(body, &json!({ "info": {} }));
    }

    #[rstest]
    #[case::empty(json!({}), 0)]
    #[case::two_matches(json!({ "KR_1": {}, "KR_2": {} }), 2)]
    fn split_document_rejects_wrong_key_count(#[case] doc: Value, #[case] found: usize) {
        match split_document(&doc) {
            Err(ExportError::MatchCount(count)) => assert_eq!(count, found),
            other => panic!("expected MatchCount error, got {other:?}"),
        }
    }

    #[test]
    fn split_document_rejects_non_object() {
        assert!(matches!(
            split_document(&json!([1, 2])),
            Err(ExportError::NotAnObject)
        ));
    }
}
