pub mod add_misuse;
pub mod consecutive_run;
pub mod copy_all;
pub mod file_naming;
pub mod macros;
pub mod maintainer;
pub mod missing_healthcheck;
pub mod missing_ignore_file;
pub mod root_user;
pub mod sensitive_arg;
pub mod sensitive_copy;
pub mod shell_lint;
pub mod terminal_order;

use crate::config::Config;
use crate::parser::Dockerfile;
use crate::shell::ShellLinter;
use crate::types::{Finding, RuleCode, Severity};

/// Everything a rule may read. Rules never mutate parser state; each
/// invocation is a pure function of this context.
pub struct RuleContext<'a> {
    pub dockerfile: &'a Dockerfile,
    pub file: String,
    pub config: &'a Config,
}

impl<'a> RuleContext<'a> {
    pub fn new(dockerfile: &'a Dockerfile, config: &'a Config) -> Self {
        Self {
            dockerfile,
            file: dockerfile.label(),
            config,
        }
    }
}

pub trait Rule: Send + Sync {
    fn code(&self) -> RuleCode;
    fn severity(&self) -> Severity;
    fn check(&self, ctx: &RuleContext) -> Vec<Finding>;
}

/// The fixed, ordered rule registry. Adding a rule here is all it takes
/// for `check` to run it; a unit test on the explain catalogue keeps the
/// `explain` surface in step.
pub fn all_rules(config: &Config, shell_linter: Box<dyn ShellLinter>) -> Vec<Box<dyn Rule>> {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(sensitive_copy::SensitiveCopyRule),
        Box::new(missing_ignore_file::MissingIgnoreFileRule),
        Box::new(copy_all::CopyAllRule),
        Box::new(sensitive_arg::SensitiveArgRule),
        Box::new(root_user::RootUserRule),
        Box::new(file_naming::FileNamingRule),
        Box::new(add_misuse::AddMisuseRule),
        Box::new(consecutive_run::ConsecutiveRunRule),
        Box::new(missing_healthcheck::MissingHealthcheckRule),
        Box::new(terminal_order::TerminalOrderRule),
        Box::new(maintainer::MaintainerRule),
        Box::new(shell_lint::ShellLintRule::new(shell_linter)),
    ];

    rules
        .into_iter()
        .filter(|r| config.rule_enabled(r.code().as_str()))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::BuiltinShellLinter;

    #[test]
    fn test_registry_covers_every_code_in_order() {
        let config = Config::default();
        let rules = all_rules(&config, Box::new(BuiltinShellLinter));
        let codes: Vec<RuleCode> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, RuleCode::ALL);
    }

    #[test]
    fn test_disabled_rules_are_filtered() {
        let config = Config {
            disabled_rules: vec!["DL008".to_string(), "DL012".to_string()],
            ..Config::default()
        };
        let rules = all_rules(&config, Box::new(BuiltinShellLinter));
        assert_eq!(rules.len(), 10);
        assert!(rules.iter().all(|r| r.code() != RuleCode::Dl008));
    }
}
