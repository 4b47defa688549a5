//! Read-only knowledge store.
//!
//! Holds the two record collections searched for every query: reason rows
//! (customer-specific loan-limit reasons) and issue records (general issues
//! grouped by category). The store is built once at startup, then shared
//! behind an `Arc`; nothing mutates it afterwards.

mod load;

use std::path::PathBuf;

use thiserror::Error;

/// Name used when a reason row carries no customer name.
pub const DEFAULT_CUSTOMER_NAME: &str = "the customer";

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid reasons table {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("invalid issues file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ── Records ───────────────────────────────────────────────────────────────────

/// One row of the reasons table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonRecord {
    /// Always populated; [`DEFAULT_CUSTOMER_NAME`] when the source had none.
    pub customer_name: String,
    pub reason: String,
    pub resolution: String,
}

impl ReasonRecord {
    /// Build a record, substituting [`DEFAULT_CUSTOMER_NAME`] for a missing
    /// or blank customer name.
    pub fn new(
        customer_name: Option<&str>,
        reason: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        let customer_name = customer_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
            .to_string();
        Self {
            customer_name,
            reason: reason.into(),
            resolution: resolution.into(),
        }
    }
}

/// One entry of the issues mapping, tagged with the category it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub category: String,
    pub issue: String,
    pub resolution: String,
}

impl IssueRecord {
    pub fn new(
        category: impl Into<String>,
        issue: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            issue: issue.into(),
            resolution: resolution.into(),
        }
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Both collections, in source order.
///
/// Issues are stored flattened in category-then-list order, which is the
/// order the matcher must report them in.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    reasons: Vec<ReasonRecord>,
    issues: Vec<IssueRecord>,
}

impl KnowledgeStore {
    pub fn new(reasons: Vec<ReasonRecord>, issues: Vec<IssueRecord>) -> Self {
        Self { reasons, issues }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn reasons(&self) -> &[ReasonRecord] {
        &self.reasons
    }

    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }

    pub fn reason_count(&self) -> usize {
        self.reasons.len()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if !out.contains(&issue.category.as_str()) {
                out.push(&issue.category);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_customer_name_gets_placeholder() {
        let r = ReasonRecord::new(None, "KYC incomplete", "Submit ID");
        assert_eq!(r.customer_name, DEFAULT_CUSTOMER_NAME);
    }

    #[test]
    fn blank_customer_name_gets_placeholder() {
        let r = ReasonRecord::new(Some("   "), "KYC incomplete", "Submit ID");
        assert_eq!(r.customer_name, "the customer");
    }

    #[test]
    fn customer_name_kept() {
        let r = ReasonRecord::new(Some("Jane"), "KYC incomplete", "Submit ID");
        assert_eq!(r.customer_name, "Jane");
    }

    #[test]
    fn padded_customer_name_kept_verbatim() {
        let r = ReasonRecord::new(Some(" Jane "), "KYC incomplete", "Submit ID");
        assert_eq!(r.customer_name, " Jane ");
    }

    #[test]
    fn categories_in_first_seen_order() {
        let store = KnowledgeStore::new(
            vec![],
            vec![
                IssueRecord::new("cards", "Card blocked", "Unblock"),
                IssueRecord::new("loans", "Limit missing", "Recompute"),
                IssueRecord::new("cards", "PIN reset", "Reset PIN"),
            ],
        );
        assert_eq!(store.categories(), vec!["cards", "loans"]);
        assert_eq!(store.issue_count(), 3);
        assert_eq!(store.reason_count(), 0);
    }
}
