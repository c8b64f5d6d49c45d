use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

pub struct MissingIgnoreFileRule;

impl Rule for MissingIgnoreFileRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl002
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        if ctx.dockerfile.ignore_patterns().is_empty() {
            emit!(
                findings,
                ctx,
                None,
                Severity::Info,
                RuleCode::Dl002,
                "no .dockerignore patterns found; the whole working tree is eligible for COPY"
            );
        }
        findings
    }
}
