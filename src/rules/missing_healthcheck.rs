use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

pub struct MissingHealthcheckRule;

impl Rule for MissingHealthcheckRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl009
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        if ctx.dockerfile.healthchecks().next().is_none() {
            emit!(
                findings,
                ctx,
                None,
                Severity::Info,
                RuleCode::Dl009,
                "no HEALTHCHECK instruction; the runtime can only tell whether PID 1 is alive"
            );
        }
        findings
    }
}
