//! Reply templates and instruction assembly.
//!
//! Everything here is a pure function of its inputs. The wording is part of
//! the service contract: replies are read by the retail digital team, who
//! expect the exact greeting, sign-off and contact address below.

use super::matcher::MatchResult;

pub const GREETING: &str = "Dear Mutisya,";
pub const SIGN_OFF: &str = "Regards,\nRetail Digital Solutions";
pub const CONTACT_ADDRESS: &str = "Mutisya.stanley@ncbagroup.com";

/// Reply for a query with no matching records. `{{query}}` is replaced once.
const FALLBACK_TEMPLATE: &str = "Dear Mutisya,

The resolution for \"{{query}}\" needs further review. Kindly reach out to Mutisya.stanley@ncbagroup.com.

Regards,
Retail Digital Solutions";

/// Persona and the two mandatory output formats.
const INSTRUCTION_HEAD: &str = "You are a formal assistant. Rewrite the following information into a polished response.
The response must ALWAYS follow one of these formats:

1. For customer-specific reasons:
Dear Mutisya,

The customer \"customer name\" does not have a loan limit due to \"reason\".

\"resolution in formal tone (e.g., Kindly advise the customer..., The customer needs...)\"

Regards,
Retail Digital Solutions

2. For general issues (no customer details):
Dear Mutisya,

To \"issue\", kindly \"resolution\".

Regards,
Retail Digital Solutions

If the data is not sufficient, use this fallback message:

";

const CONTEXT_HEADER: &str = "\n\nHere is the raw info you must reframe:\n";

/// The fixed no-match reply, quoting `query` verbatim.
pub fn fallback_message(query: &str) -> String {
    FALLBACK_TEMPLATE.replacen("{{query}}", query, 1)
}

/// Render one match as a single line of plain text.
pub fn context_line(m: &MatchResult) -> String {
    match m {
        MatchResult::Reason { customer_name, reason, resolution } => format!(
            "Customer \"{customer_name}\" does not have a loan limit due to \"{reason}\". Resolution: {resolution}"
        ),
        MatchResult::Issue { issue, resolution } => {
            format!("Issue: \"{issue}\". Resolution: {resolution}")
        }
    }
}

/// One line per match, newline-joined, in match order.
pub fn assemble_context(matches: &[MatchResult]) -> String {
    matches.iter().map(context_line).collect::<Vec<_>>().join("\n")
}

/// Full instruction sent to the completion service.
///
/// The context is appended last and verbatim.
pub fn build_instruction(query: &str, context: &str) -> String {
    let fallback = fallback_message(query);
    let mut out =
        String::with_capacity(INSTRUCTION_HEAD.len() + fallback.len() + CONTEXT_HEADER.len() + context.len());
    out.push_str(INSTRUCTION_HEAD);
    out.push_str(&fallback);
    out.push_str(CONTEXT_HEADER);
    out.push_str(context);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_exact_text() {
        assert_eq!(
            fallback_message("card blocked"),
            "Dear Mutisya,\n\n\
             The resolution for \"card blocked\" needs further review. \
             Kindly reach out to Mutisya.stanley@ncbagroup.com.\n\n\
             Regards,\nRetail Digital Solutions"
        );
    }

    #[test]
    fn fallback_keeps_query_verbatim() {
        let q = "  Weird {{query}} \"quoted\"  ";
        let msg = fallback_message(q);
        assert!(msg.contains(&format!("\"{q}\"")));
        assert!(msg.starts_with(GREETING));
        assert!(msg.ends_with(SIGN_OFF));
        assert!(msg.contains(CONTACT_ADDRESS));
    }

    #[test]
    fn reason_line_format() {
        let m = MatchResult::Reason {
            customer_name: "Jane".into(),
            reason: "KYC incomplete".into(),
            resolution: "Ask Jane to submit ID".into(),
        };
        assert_eq!(
            context_line(&m),
            "Customer \"Jane\" does not have a loan limit due to \"KYC incomplete\". Resolution: Ask Jane to submit ID"
        );
    }

    #[test]
    fn issue_line_format() {
        let m = MatchResult::Issue {
            issue: "Loan declined".into(),
            resolution: "check the CRB status".into(),
        };
        assert_eq!(
            context_line(&m),
            "Issue: \"Loan declined\". Resolution: check the CRB status"
        );
    }

    #[test]
    fn context_joined_in_order() {
        let matches = vec![
            MatchResult::Reason {
                customer_name: "the customer".into(),
                reason: "Dormant".into(),
                resolution: "Reactivate".into(),
            },
            MatchResult::Issue { issue: "Dormant account".into(), resolution: "visit a branch".into() },
        ];
        let ctx = assemble_context(&matches);
        let lines: Vec<&str> = ctx.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Customer \"the customer\""));
        assert!(lines[1].starts_with("Issue: \"Dormant account\""));
    }

    #[test]
    fn instruction_carries_both_formats() {
        let text = build_instruction("kyc", "Issue: \"x\". Resolution: y");
        assert!(text.starts_with("You are a formal assistant."));
        assert!(text.contains("1. For customer-specific reasons:"));
        assert!(text.contains(
            "The customer \"customer name\" does not have a loan limit due to \"reason\"."
        ));
        assert!(text.contains("2. For general issues (no customer details):"));
        assert!(text.contains("To \"issue\", kindly \"resolution\"."));
        assert!(text.contains("If the data is not sufficient, use this fallback message:"));
        assert!(text.contains(&fallback_message("kyc")));
        assert_eq!(text.matches("Dear Mutisya,").count(), 3);
    }

    #[test]
    fn instruction_ends_with_context_verbatim() {
        let ctx = "Customer \"Jane\" does not have a loan limit due to \"KYC incomplete\". Resolution: Ask Jane to submit ID";
        let text = build_instruction("kyc", ctx);
        assert!(text.ends_with(&format!("Here is the raw info you must reframe:\n{ctx}")));
    }
}
