use crate::emit;
use crate::shell::{ShellLinter, ShellSeverity};
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// Hands each RUN body to the shell-lint collaborator and surfaces its
/// diagnostics: linter errors become major findings, everything below
/// becomes minor.
pub struct ShellLintRule {
    linter: Box<dyn ShellLinter>,
}

impl ShellLintRule {
    pub fn new(linter: Box<dyn ShellLinter>) -> Self {
        Self { linter }
    }
}

impl Rule for ShellLintRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl012
    }

    fn severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.runs() {
            let Some(command) = inst.command() else {
                continue;
            };
            for diagnostic in self.linter.lint(&command.command_line()) {
                let severity = match diagnostic.severity {
                    ShellSeverity::Error => Severity::Major,
                    ShellSeverity::Warning | ShellSeverity::Style => Severity::Minor,
                };
                emit!(
                    findings,
                    ctx,
                    Some(inst.span.start),
                    severity,
                    RuleCode::Dl012,
                    "{}",
                    diagnostic.message
                );
            }
        }

        findings
    }
}
