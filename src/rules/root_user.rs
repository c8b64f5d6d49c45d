use crate::emit;
use crate::parser::InstructionDetails;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// Only the last USER matters: it decides which account the container's
/// entry process runs under. No USER at all is not flagged, since base
/// images may already switch away from root.
pub struct RootUserRule;

impl Rule for RootUserRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl005
    }

    fn severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        let Some(last) = ctx.dockerfile.users().last() else {
            return findings;
        };
        if let InstructionDetails::User { user, .. } = &last.details {
            if user.eq_ignore_ascii_case("root") {
                emit!(
                    findings,
                    ctx,
                    Some(last.span.start),
                    Severity::Major,
                    RuleCode::Dl005,
                    "the final USER is root; switch to a dedicated unprivileged account"
                );
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_helpers::check;

    #[test]
    fn test_root_user_flagged() {
        let findings = check(&RootUserRule, "USER root");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Major);
    }

    #[test]
    fn test_last_user_wins() {
        let findings = check(&RootUserRule, "USER root\nUSER nobody");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_switch_back_to_root_flagged() {
        let findings = check(&RootUserRule, "USER nobody\nUSER root");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(2));
    }

    #[test]
    fn test_no_user_instruction_is_clean() {
        let findings = check(&RootUserRule, "FROM alpine\nCMD [\"sh\"]");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_root_match_is_case_insensitive() {
        let findings = check(&RootUserRule, "USER ROOT");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_root_with_group_flagged() {
        let findings = check(&RootUserRule, "USER root:1000");
        assert_eq!(findings.len(), 1);
    }
}
