//! File loaders for the knowledge store.
//!
//! - reasons: CSV with a header row; `reason` and `resolution` columns are
//!   required, `customer_name` is optional.
//! - issues: JSON object of `category → [{ "issue", "resolution" }]`.
//!   Category order follows the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{IssueRecord, KnowledgeError, KnowledgeStore, ReasonRecord};

#[derive(Deserialize)]
struct RawReasonRow {
    #[serde(default)]
    customer_name: Option<String>,
    reason: String,
    resolution: String,
}

#[derive(Deserialize)]
struct RawIssue {
    issue: String,
    resolution: String,
}

impl KnowledgeStore {
    /// Load both collections from disk.
    pub fn load(reasons_path: &Path, issues_path: &Path) -> Result<Self, KnowledgeError> {
        let reasons = load_reasons(reasons_path)?;
        let issues = load_issues(issues_path)?;
        info!(
            reasons = reasons.len(),
            issues = issues.len(),
            reasons_path = %reasons_path.display(),
            issues_path = %issues_path.display(),
            "knowledge store loaded"
        );
        Ok(Self::new(reasons, issues))
    }
}

fn load_reasons(path: &Path) -> Result<Vec<ReasonRecord>, KnowledgeError> {
    let text = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reasons(&text).map_err(|source| KnowledgeError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_reasons(text: &str) -> Result<Vec<ReasonRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    reader
        .deserialize::<RawReasonRow>()
        .map(|row| {
            row.map(|r| ReasonRecord::new(r.customer_name.as_deref(), r.reason, r.resolution))
        })
        .collect()
}

fn load_issues(path: &Path) -> Result<Vec<IssueRecord>, KnowledgeError> {
    let text = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_issues(&text).map_err(|source| KnowledgeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_issues(text: &str) -> Result<Vec<IssueRecord>, serde_json::Error> {
    // `preserve_order` keeps the map in file order.
    let by_category: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;

    let mut out = Vec::new();
    for (category, cases) in by_category {
        let cases: Vec<RawIssue> = serde_json::from_value(cases)?;
        out.extend(
            cases
                .into_iter()
                .map(|c| IssueRecord::new(category.clone(), c.issue, c.resolution)),
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::DEFAULT_CUSTOMER_NAME;
    use tempfile::TempDir;

    #[test]
    fn reasons_with_customer_column() {
        let csv = "customer_name,reason,resolution\n\
                   Jane,KYC incomplete,Ask Jane to submit ID\n\
                   ,Dormant account,Reactivate the account\n";
        let rows = parse_reasons(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer_name, "Jane");
        assert_eq!(rows[0].reason, "KYC incomplete");
        assert_eq!(rows[1].customer_name, DEFAULT_CUSTOMER_NAME);
        assert_eq!(rows[1].resolution, "Reactivate the account");
    }

    #[test]
    fn reasons_without_customer_column() {
        let csv = "reason,resolution\nLow turnover,Increase deposits\n";
        let rows = parse_reasons(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, DEFAULT_CUSTOMER_NAME);
    }

    #[test]
    fn reasons_quoted_commas() {
        let csv = "reason,resolution\n\"Arrears, 30 days\",\"Clear arrears, then retry\"\n";
        let rows = parse_reasons(csv).unwrap();
        assert_eq!(rows[0].reason, "Arrears, 30 days");
        assert_eq!(rows[0].resolution, "Clear arrears, then retry");
    }

    #[test]
    fn reasons_missing_required_column_errors() {
        let csv = "customer_name,reason\nJane,KYC incomplete\n";
        assert!(parse_reasons(csv).is_err());
    }

    #[test]
    fn issues_flatten_in_file_order() {
        let json = r#"{
            "loans": [
                {"issue": "Limit not showing", "resolution": "refresh the limit"},
                {"issue": "Loan declined", "resolution": "check the CRB status"}
            ],
            "accounts": [
                {"issue": "Account locked", "resolution": "reset the PIN"}
            ]
        }"#;
        let issues = parse_issues(json).unwrap();
        let got: Vec<(&str, &str)> = issues
            .iter()
            .map(|i| (i.category.as_str(), i.issue.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("loans", "Limit not showing"),
                ("loans", "Loan declined"),
                ("accounts", "Account locked"),
            ]
        );
    }

    #[test]
    fn issues_empty_object() {
        assert!(parse_issues("{}").unwrap().is_empty());
    }

    #[test]
    fn issues_missing_field_errors() {
        let json = r#"{"loans": [{"resolution": "no issue text"}]}"#;
        assert!(parse_issues(json).is_err());
    }

    #[test]
    fn load_from_files() {
        let dir = TempDir::new().unwrap();
        let reasons = dir.path().join("reasons.csv");
        let issues = dir.path().join("issues.json");
        std::fs::write(&reasons, "customer_name,reason,resolution\nJane,KYC incomplete,Submit ID\n").unwrap();
        std::fs::write(&issues, r#"{"loans": [{"issue": "Loan declined", "resolution": "retry"}]}"#).unwrap();

        let store = KnowledgeStore::load(&reasons, &issues).unwrap();
        assert_eq!(store.reason_count(), 1);
        assert_eq!(store.issue_count(), 1);
        assert_eq!(store.categories(), vec!["loans"]);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = KnowledgeStore::load(&missing, &missing).unwrap_err();
        assert!(matches!(err, KnowledgeError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
