use crate::emit;
use crate::parser::Kind;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// ENTRYPOINT/CMD describe how the image runs and belong at the end.
/// Anything after the last of them (except a trailing CMD, which
/// supplies default arguments, or a comment) is reported.
pub struct TerminalOrderRule;

impl Rule for TerminalOrderRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl010
    }

    fn severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        let instructions = ctx.dockerfile.instructions();
        let Some(terminal) = instructions
            .iter()
            .rposition(|i| matches!(i.kind, Kind::Entrypoint | Kind::Cmd))
        else {
            return findings;
        };

        for inst in &instructions[terminal + 1..] {
            if matches!(inst.kind, Kind::Cmd | Kind::Comment) {
                continue;
            }
            emit!(
                findings,
                ctx,
                Some(inst.span.start),
                Severity::Major,
                RuleCode::Dl010,
                "{} after the final ENTRYPOINT/CMD; terminal instructions should come last",
                inst.kind
            );
        }

        findings
    }
}
