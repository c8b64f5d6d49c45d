use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// ADD earns its keep fetching URLs and auto-extracting archives; for
/// anything else COPY does the same job without the surprise semantics.
pub struct AddMisuseRule;

impl AddMisuseRule {
    fn is_archive(source: &str, suffixes: &[String]) -> bool {
        let lowered = source.to_lowercase();
        suffixes
            .iter()
            .any(|suffix| lowered.ends_with(&suffix.to_lowercase()))
    }
}

impl Rule for AddMisuseRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl007
    }

    fn severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.adds() {
            let Some(transfer) = inst.transfer() else {
                continue;
            };
            for source in &transfer.sources {
                let is_url = source.starts_with("http://") || source.starts_with("https://");
                if !is_url && !Self::is_archive(source, &ctx.config.archive_suffixes) {
                    emit!(
                        findings,
                        ctx,
                        Some(inst.span.start),
                        Severity::Minor,
                        RuleCode::Dl007,
                        "ADD of plain source \"{}\"; use COPY unless fetching a URL or extracting an archive",
                        source
                    );
                }
            }
        }

        findings
    }
}
