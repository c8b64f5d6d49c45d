use crate::emit;
use crate::parser::Kind;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// Adjacent RUN instructions each cost a layer; chaining them with `&&`
/// collapses the pair. Both members of an adjacent pair are reported.
pub struct ConsecutiveRunRule;

impl Rule for ConsecutiveRunRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl008
    }

    fn severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for pair in ctx.dockerfile.instructions().windows(2) {
            if pair[0].kind == Kind::Run && pair[1].kind == Kind::Run {
                for inst in pair {
                    emit!(
                        findings,
                        ctx,
                        Some(inst.span.start),
                        Severity::Major,
                        RuleCode::Dl008,
                        "consecutive RUN instructions; chain them with && to avoid an extra layer"
                    );
                }
            }
        }

        findings
    }
}
