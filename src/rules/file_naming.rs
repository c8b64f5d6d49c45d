use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// `Dockerfile` and `<purpose>.Dockerfile` are the shapes tooling
/// auto-detects. Raw-text input has no filename and is never flagged.
pub struct FileNamingRule;

impl Rule for FileNamingRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl006
    }

    fn severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        let Some(name) = ctx
            .dockerfile
            .path()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        else {
            return findings;
        };
        let suffix = name.rsplit('.').next().unwrap_or(name);
        if suffix != "Dockerfile" {
            emit!(
                findings,
                ctx,
                None,
                Severity::Minor,
                RuleCode::Dl006,
                "filename \"{}\" does not end in \"Dockerfile\"; tooling will not recognize it",
                name
            );
        }

        findings
    }
}
