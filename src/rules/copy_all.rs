use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

pub struct CopyAllRule;

impl Rule for CopyAllRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl003
    }

    fn severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.copies() {
            let Some(transfer) = inst.transfer() else {
                continue;
            };
            if transfer.sources.iter().any(|s| s == ".") {
                emit!(
                    findings,
                    ctx,
                    Some(inst.span.start),
                    Severity::Major,
                    RuleCode::Dl003,
                    "COPY of the whole build context; copy only the paths the image needs"
                );
            }
        }

        findings
    }
}
