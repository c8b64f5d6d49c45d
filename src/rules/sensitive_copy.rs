use crate::emit;
use crate::types::{Finding, RuleCode, Severity};

use super::{Rule, RuleContext};

/// Layers are immutable: a credential copied into the image can be read
/// back out of the layer tarball forever, even if a later step deletes it.
pub struct SensitiveCopyRule;

impl Rule for SensitiveCopyRule {
    fn code(&self) -> RuleCode {
        RuleCode::Dl001
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &RuleContext) -> Vec<Finding> {
        let mut findings = Vec::new();

        for inst in ctx.dockerfile.copies().chain(ctx.dockerfile.adds()) {
            let Some(transfer) = inst.transfer() else {
                continue;
            };
            for word in &ctx.config.sensitive_files {
                let needle = word.to_lowercase();
                let hit = transfer
                    .sources
                    .iter()
                    .chain(std::iter::once(&transfer.target))
                    .any(|path| path.to_lowercase().contains(&needle));
                if hit {
                    emit!(
                        findings,
                        ctx,
                        Some(inst.span.start),
                        Severity::Critical,
                        RuleCode::Dl001,
                        "{} matches sensitive pattern \"{}\"; make sure no credentials end up in the image",
                        inst.kind,
                        word
                    );
                }
            }
        }

        findings
    }
}
