//! Status catalog and notification text for a single homework record.

use serde_json::Value;

use crate::{errors::Error, Result};

/// Reviewer verdict text for a status code, or `None` for codes outside the
/// catalog.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Work reviewed: the reviewer liked everything. Hooray!"),
        "reviewing" => Some("Work taken up for review by the reviewer."),
        "rejected" => Some("Work reviewed: the reviewer has remarks."),
        _ => None,
    }
}

/// Composes the notification message for one homework record.
pub fn parse_status(homework: &Value) -> Result<String> {
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::UnknownStatus("<missing>".to_string()))?;

    let verdict = verdict_for(status).ok_or_else(|| Error::UnknownStatus(status.to_string()))?;

    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingKey("homework_name"))?;

    Ok(format!("Changed review status of work \"{name}\". {verdict}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CATALOG: [(&str, &str); 3] = [
        (
            "approved",
            "Work reviewed: the reviewer liked everything. Hooray!",
        ),
        ("reviewing", "Work taken up for review by the reviewer."),
        ("rejected", "Work reviewed: the reviewer has remarks."),
    ];

    #[test]
    fn formats_every_catalog_status() {
        for (status, verdict) in CATALOG {
            let record = json!({ "homework_name": "final project", "status": status });
            let msg = parse_status(&record).expect("catalog status must format");
            assert!(msg.contains("final project"), "{msg}");
            assert!(msg.contains(verdict), "{msg}");
        }
    }

    #[test]
    fn exact_message_for_approved() {
        let record = json!({ "homework_name": "hw1", "status": "approved" });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Changed review status of work \"hw1\". \
             Work reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn rejects_unknown_status() {
        let record = json!({ "homework_name": "hw1", "status": "burned" });
        let err = parse_status(&record).expect_err("unknown status must fail");
        assert!(matches!(err, Error::UnknownStatus(s) if s == "burned"));
    }

    #[test]
    fn rejects_missing_status() {
        let record = json!({ "homework_name": "hw1" });
        let err = parse_status(&record).expect_err("missing status must fail");
        assert!(matches!(err, Error::UnknownStatus(_)));
    }

    #[test]
    fn rejects_missing_homework_name() {
        let record = json!({ "status": "approved" });
        let err = parse_status(&record).expect_err("missing name must fail");
        assert!(matches!(err, Error::MissingKey("homework_name")));
    }

    #[test]
    fn unknown_code_has_no_verdict() {
        assert!(verdict_for("pending").is_none());
    }
}
