use regex::Regex;
use std::sync::LazyLock;

/// Severity scale reported by shell linters. `Error` maps to a major
/// finding, everything below to minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSeverity {
    Style,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellDiagnostic {
    pub severity: ShellSeverity,
    pub message: String,
}

/// Collaborator boundary for RUN-body analysis. The engine only depends
/// on this trait; implementations can be swapped without touching any
/// rule code.
pub trait ShellLinter: Send + Sync {
    fn lint(&self, command: &str) -> Vec<ShellDiagnostic>;
}

static SHELL_PATTERNS: LazyLock<Vec<(Regex, ShellSeverity, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)\bsudo\b",
            ShellSeverity::Error,
            "sudo is redundant in a container build; RUN already executes as the build user",
        ),
        (
            r"(?i)\b(?:curl|wget)\b[^|]*\|\s*(?:ba)?sh\b",
            ShellSeverity::Error,
            "piping a download straight into a shell executes unverified remote code",
        ),
        (
            r"(?i)(?:^|&&|;)\s*cd\s+\S+",
            ShellSeverity::Style,
            "use WORKDIR instead of cd so the directory change survives the layer",
        ),
    ]
    .into_iter()
    .map(|(pattern, severity, message)| (Regex::new(pattern).unwrap(), severity, message))
    .collect()
});

static APT_GET_INSTALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bapt-get\s+install\b").unwrap());
static APT_GET_ASSUME_YES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s)(?:-y|-qy|-yq|--yes|--assume-yes)\b").unwrap());

/// Pattern-based linter used when no external analyzer is wired in.
#[derive(Debug, Default)]
pub struct BuiltinShellLinter;

impl ShellLinter for BuiltinShellLinter {
    fn lint(&self, command: &str) -> Vec<ShellDiagnostic> {
        let mut diagnostics = Vec::new();
        // Continuation backslashes survive parsing; drop them so the
        // patterns see one logical command string.
        let flattened = command.replace('\\', " ");
        for (pattern, severity, message) in SHELL_PATTERNS.iter() {
            if pattern.is_match(&flattened) {
                diagnostics.push(ShellDiagnostic {
                    severity: *severity,
                    message: (*message).to_string(),
                });
            }
        }
        if APT_GET_INSTALL.is_match(&flattened) && !APT_GET_ASSUME_YES.is_match(&flattened) {
            diagnostics.push(ShellDiagnostic {
                severity: ShellSeverity::Warning,
                message: "apt-get install without -y hangs the build waiting for confirmation"
                    .to_string(),
            });
        }
        diagnostics
    }
}
