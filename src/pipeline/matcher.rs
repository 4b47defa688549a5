//! Case-insensitive substring search over the knowledge store.

use serde::Serialize;

use crate::knowledge::{IssueRecord, ReasonRecord};

/// One hit, tagged by the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchResult {
    Reason {
        customer_name: String,
        reason: String,
        resolution: String,
    },
    Issue {
        issue: String,
        resolution: String,
    },
}

impl MatchResult {
    pub fn resolution(&self) -> &str {
        match self {
            MatchResult::Reason { resolution, .. } | MatchResult::Issue { resolution, .. } => {
                resolution
            }
        }
    }
}

/// Return every record whose searchable text contains `query`, ignoring case.
///
/// Reason matches come first in row order, then issue matches in
/// category-then-list order. An empty query matches everything.
pub fn search(query: &str, reasons: &[ReasonRecord], issues: &[IssueRecord]) -> Vec<MatchResult> {
    let needle = query.to_lowercase();

    let reason_hits = reasons
        .iter()
        .filter(|r| r.reason.to_lowercase().contains(&needle))
        .map(|r| MatchResult::Reason {
            customer_name: r.customer_name.clone(),
            reason: r.reason.clone(),
            resolution: r.resolution.clone(),
        });

    let issue_hits = issues
        .iter()
        .filter(|i| i.issue.to_lowercase().contains(&needle))
        .map(|i| MatchResult::Issue {
            issue: i.issue.clone(),
            resolution: i.resolution.clone(),
        });

    reason_hits.chain(issue_hits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reasons() -> Vec<ReasonRecord> {
        vec![
            ReasonRecord::new(Some("Jane"), "KYC incomplete", "Ask Jane to submit ID"),
            ReasonRecord::new(None, "Loan in arrears", "Clear the arrears"),
            ReasonRecord::new(Some("Otieno"), "Incomplete KYC documents", "Upload documents"),
        ]
    }

    fn issues() -> Vec<IssueRecord> {
        vec![
            IssueRecord::new("loans", "Loan limit not showing", "refresh the limit"),
            IssueRecord::new("loans", "Loan declined", "check the CRB status"),
            IssueRecord::new("accounts", "KYC update failed", "retry the KYC update"),
        ]
    }

    #[test]
    fn single_reason_example() {
        let r = vec![ReasonRecord::new(Some("Jane"), "KYC incomplete", "Ask Jane to submit ID")];
        let got = search("kyc", &r, &[]);
        assert_eq!(
            got,
            vec![MatchResult::Reason {
                customer_name: "Jane".into(),
                reason: "KYC incomplete".into(),
                resolution: "Ask Jane to submit ID".into(),
            }]
        );
    }

    #[test]
    fn empty_store_yields_nothing() {
        assert!(search("anything", &[], &[]).is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        let got = search("", &reasons(), &issues());
        assert_eq!(got.len(), 6);
    }

    #[test]
    fn whitespace_query_is_literal() {
        // A lone space only matches multi-word fields.
        let r = vec![
            ReasonRecord::new(None, "Dormant", "Reactivate"),
            ReasonRecord::new(None, "Low turnover", "Deposit more"),
        ];
        let got = search(" ", &r, &[]);
        assert_eq!(got.len(), 1);
        assert!(matches!(&got[0], MatchResult::Reason { reason, .. } if reason == "Low turnover"));
    }

    #[test]
    fn case_insensitive_both_ways() {
        let got = search("LOAN", &reasons(), &issues());
        assert_eq!(got.len(), 3);
        let got_lower = search("loan", &reasons(), &issues());
        assert_eq!(got, got_lower);
    }

    #[test]
    fn reasons_precede_issues_in_source_order() {
        let got = search("kyc", &reasons(), &issues());
        let tags: Vec<&str> = got
            .iter()
            .map(|m| match m {
                MatchResult::Reason { reason, .. } => reason.as_str(),
                MatchResult::Issue { issue, .. } => issue.as_str(),
            })
            .collect();
        assert_eq!(
            tags,
            vec!["KYC incomplete", "Incomplete KYC documents", "KYC update failed"]
        );
    }

    #[test]
    fn missing_customer_name_carries_placeholder() {
        let got = search("arrears", &reasons(), &[]);
        assert!(matches!(
            &got[0],
            MatchResult::Reason { customer_name, .. } if customer_name == "the customer"
        ));
    }

    #[test]
    fn category_not_propagated() {
        let got = search("declined", &[], &issues());
        assert_eq!(
            got,
            vec![MatchResult::Issue {
                issue: "Loan declined".into(),
                resolution: "check the CRB status".into(),
            }]
        );
    }

    #[test]
    fn searches_only_the_searchable_field() {
        // "CRB" appears only in a resolution.
        assert!(search("crb", &reasons(), &issues()).is_empty());
    }

    #[test]
    fn sound_and_complete() {
        let r = reasons();
        let i = issues();
        for query in ["", "k", "kyc", "loan", "in", "zzz", "D"] {
            let got = search(query, &r, &i);
            let q = query.to_lowercase();

            for m in &got {
                let field = match m {
                    MatchResult::Reason { reason, .. } => reason,
                    MatchResult::Issue { issue, .. } => issue,
                };
                assert!(field.to_lowercase().contains(&q), "{field:?} does not contain {q:?}");
            }

            let expected = r.iter().filter(|x| x.reason.to_lowercase().contains(&q)).count()
                + i.iter().filter(|x| x.issue.to_lowercase().contains(&q)).count();
            assert_eq!(got.len(), expected, "query {query:?}");
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let r = reasons();
        let i = issues();
        assert_eq!(search("o", &r, &i), search("o", &r, &i));
    }

    #[test]
    fn serializes_with_type_tag() {
        let m = MatchResult::Issue { issue: "Loan declined".into(), resolution: "retry".into() };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["type"], "issue");
        assert_eq!(v["issue"], "Loan declined");
        assert_eq!(m.resolution(), "retry");
    }
}
