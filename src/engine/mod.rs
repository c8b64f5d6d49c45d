use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::parser::Dockerfile;
use crate::rules::{self, RuleContext};
use crate::shell::{BuiltinShellLinter, ShellLinter};
use crate::types::Report;

pub fn run(dockerfile: &Dockerfile, config: &Config) -> Report {
    run_with_linter(dockerfile, config, Box::new(BuiltinShellLinter))
}

/// Evaluate every registered rule against one parsed Dockerfile.
///
/// Rules are independent and only read the immutable parse, so they run
/// in parallel, each into its own finding list; the merged result is
/// sorted and structurally deduplicated before reporting.
pub fn run_with_linter(
    dockerfile: &Dockerfile,
    config: &Config,
    shell_linter: Box<dyn ShellLinter>,
) -> Report {
    let ctx = RuleContext::new(dockerfile, config);
    let rules = rules::all_rules(config, shell_linter);

    let mut findings: Vec<_> = rules
        .par_iter()
        .flat_map(|rule| rule.check(&ctx))
        .collect();

    findings.sort_by(|a, b| {
        (&a.file, a.line, a.code, &a.message).cmp(&(&b.file, b.line, b.code, &b.message))
    });
    findings.dedup();
    debug!(count = findings.len(), "rule evaluation finished");

    Report { findings }
}
