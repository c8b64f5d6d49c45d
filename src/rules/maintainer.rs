use crate::emit;
use crate::parser::InstructionDetails;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

pub struct MaintainerRule;

impl Rule for MaintainerRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl011
    }

    fn severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.maintainers() {
            let InstructionDetails::Maintainer { maintainer } = &inst.details else {
                continue;
            };
            emit!(
                findings,
                ctx,
                Some(inst.span.start),
                Severity::Major,
                RuleCode::Dl011,
                "MAINTAINER is deprecated; use `LABEL maintainer=\"{}\"` instead",
                maintainer
            );
        }

        findings
    }
}
