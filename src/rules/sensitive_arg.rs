use crate::emit;
use crate::parser::InstructionDetails;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// ARG values are recorded in image metadata and surface in
/// `docker history`; a secret passed this way is not ephemeral.
pub struct SensitiveArgRule;

impl Rule for SensitiveArgRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl004
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.args() {
            let InstructionDetails::Arg { argument, .. } = &inst.details else {
                continue;
            };
            let name = argument.to_lowercase();
            for keyword in &ctx.config.sensitive_build_args {
                if name.contains(&keyword.to_lowercase()) {
                    emit!(
                        findings,
                        ctx,
                        Some(inst.span.start),
                        Severity::Critical,
                        RuleCode::Dl004,
                        "build argument \"{}\" matches sensitive keyword \"{}\"; build args are readable from the image metadata",
                        argument,
                        keyword
                    );
                }
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
    fn test_api_key_arg_flagged() {
        let findings = check(&SensitiveArgRule, "ARG api_key=secret");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn test_token_arg_flagged() {
        let findings = check(&SensitiveArgRule, "ARG GITHUB_TOKEN");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_password_arg_flagged() {
        let findings = check(&SensitiveArgRule, "ARG db_password");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_plain_arg_clean() {
        let findings = check(&SensitiveArgRule, "ARG version=1.2.3");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_only_name_checked_not_value() {
        // The default value is not inspected, only the argument name
        let findings = check(&SensitiveArgRule, "ARG build_date=token");
        assert!(findings.is_empty());
    }
}
