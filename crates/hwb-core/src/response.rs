//! Shape checks for the homework-review API response.

use serde_json::Value;

use crate::{errors::Error, Result};

/// Validates the API body and returns the homework list unchanged.
///
/// The list may be empty; records inside it are not inspected here.
pub fn extract_homeworks(body: &Value) -> Result<&Vec<Value>> {
    let map = body
        .as_object()
        .ok_or_else(|| Error::UnexpectedType("response is not an object".to_string()))?;

    let homeworks = map.get("homeworks").ok_or(Error::MissingKey("homeworks"))?;

    homeworks
        .as_array()
        .ok_or_else(|| Error::UnexpectedType("homeworks is not a list".to_string()))
}

/// Server-reported clock, used to advance the poll watermark.
pub fn server_date(body: &Value) -> Option<i64> {
    body.get("current_date").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_body() {
        for body in [json!([1, 2]), json!("homeworks"), json!(42), json!(null)] {
            let err = extract_homeworks(&body).expect_err("non-object must fail");
            assert!(matches!(err, Error::UnexpectedType(_)), "got {err:?}");
        }
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let body = json!({ "current_date": 1000 });
        let err = extract_homeworks(&body).expect_err("missing key must fail");
        assert!(matches!(err, Error::MissingKey("homeworks")));
    }

    #[test]
    fn rejects_non_list_homeworks() {
        let body = json!({ "homeworks": { "homework_name": "hw1" } });
        let err = extract_homeworks(&body).expect_err("non-list must fail");
        assert!(matches!(err, Error::UnexpectedType(_)));
    }

    #[test]
    fn accepts_empty_list() {
        let body = json!({ "homeworks": [], "current_date": 1000 });
        let homeworks = extract_homeworks(&body).expect("empty list is valid");
        assert!(homeworks.is_empty());
    }

    #[test]
    fn returns_list_unchanged() {
        let body = json!({
            "homeworks": [
                { "homework_name": "hw1", "status": "approved" },
                { "homework_name": "hw2", "status": "rejected" },
            ],
            "current_date": 1000,
        });
        let homeworks = extract_homeworks(&body).expect("valid body");
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw1");
    }

    #[test]
    fn server_date_reads_integer_only() {
        assert_eq!(server_date(&json!({ "current_date": 1000 })), Some(1000));
        assert_eq!(server_date(&json!({ "current_date": "1000" })), None);
        assert_eq!(server_date(&json!({})), None);
    }
}
