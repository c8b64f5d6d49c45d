use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
}

impl Severity {
    /// Uppercase label used in rendered report lines.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleCode {
    Dl001,
    Dl002,
    Dl003,
    Dl004,
    Dl005,
    Dl006,
    Dl007,
    Dl008,
    Dl009,
    Dl010,
    Dl011,
    Dl012,
}

impl RuleCode {
    pub const ALL: &'static [RuleCode] = &[
        RuleCode::Dl001,
        RuleCode::Dl002,
        RuleCode::Dl003,
        RuleCode::Dl004,
        RuleCode::Dl005,
        RuleCode::Dl006,
        RuleCode::Dl007,
        RuleCode::Dl008,
        RuleCode::Dl009,
        RuleCode::Dl010,
        RuleCode::Dl011,
        RuleCode::Dl012,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleCode::Dl001 => "DL001",
            RuleCode::Dl002 => "DL002",
            RuleCode::Dl003 => "DL003",
            RuleCode::Dl004 => "DL004",
            RuleCode::Dl005 => "DL005",
            RuleCode::Dl006 => "DL006",
            RuleCode::Dl007 => "DL007",
            RuleCode::Dl008 => "DL008",
            RuleCode::Dl009 => "DL009",
            RuleCode::Dl010 => "DL010",
            RuleCode::Dl011 => "DL011",
            RuleCode::Dl012 => "DL012",
        }
    }
}

impl Serialize for RuleCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for RuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule violation. `line` is `None` for findings that apply to the
/// whole file; rendered output shows those as line 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: Option<usize>,
    pub severity: Severity,
    pub code: RuleCode,
    pub message: String,
}

impl Finding {
    pub fn rendered(&self) -> String {
        format!(
            "{}:{} - {} - {} - {}",
            self.file,
            self.line.unwrap_or(0),
            self.code,
            self.severity.label(),
            self.message
        )
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    pub fn major_count(&self) -> usize {
        self.count(Severity::Major)
    }

    pub fn minor_count(&self) -> usize {
        self.count(Severity::Minor)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    pub fn has_severity_at_least(&self, threshold: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= threshold)
    }

    pub fn rendered_lines(&self) -> Vec<String> {
        self.findings.iter().map(Finding::rendered).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(severity: Severity) -> Finding {
        Finding {
            file: "Dockerfile".to_string(),
            line: Some(1),
            severity,
            code: RuleCode::Dl001,
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Major);
        assert!(Severity::Major > Severity::Minor);
        assert!(Severity::Minor > Severity::Info);
    }

    #[test]
    fn test_has_severity_at_least_critical() {
        let report = Report {
            findings: vec![make_finding(Severity::Critical)],
        };
        assert!(report.has_severity_at_least(Severity::Critical));
        assert!(report.has_severity_at_least(Severity::Info));
    }

    #[test]
    fn test_has_severity_at_least_major_only() {
        let report = Report {
            findings: vec![make_finding(Severity::Major)],
        };
        assert!(!report.has_severity_at_least(Severity::Critical));
        assert!(report.has_severity_at_least(Severity::Major));
        assert!(report.has_severity_at_least(Severity::Minor));
    }

    #[test]
    fn test_has_severity_at_least_empty() {
        let report = Report::default();
        assert!(!report.has_severity_at_least(Severity::Info));
    }

    #[test]
    fn test_count_methods() {
        let report = Report {
            findings: vec![
                make_finding(Severity::Critical),
                make_finding(Severity::Critical),
                make_finding(Severity::Major),
                make_finding(Severity::Minor),
                make_finding(Severity::Info),
                make_finding(Severity::Info),
            ],
        };
        assert_eq!(report.critical_count(), 2);
        assert_eq!(report.major_count(), 1);
        assert_eq!(report.minor_count(), 1);
        assert_eq!(report.info_count(), 2);
    }

    #[test]
    fn test_rendered_with_line() {
        let f = make_finding(Severity::Critical);
        assert_eq!(f.rendered(), "Dockerfile:1 - DL001 - CRITICAL - test");
    }

    #[test]
    fn test_rendered_file_scope_uses_zero() {
        let f = Finding {
            file: "Dockerfile".to_string(),
            line: None,
            severity: Severity::Info,
            code: RuleCode::Dl002,
            message: "no ignore file".to_string(),
        };
        assert_eq!(f.rendered(), "Dockerfile:0 - DL002 - INFO - no ignore file");
    }

    #[test]
    fn test_rule_code_display() {
        assert_eq!(RuleCode::Dl001.to_string(), "DL001");
        assert_eq!(RuleCode::Dl012.to_string(), "DL012");
    }

    #[test]
    fn test_finding_serialization() {
        let f = make_finding(Severity::Critical);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["code"], "DL001");
    }

    #[test]
    fn test_severity_deserialize_roundtrip() {
        for sev in [
            Severity::Info,
            Severity::Minor,
            Severity::Major,
            Severity::Critical,
        ] {
            let json = serde_json::to_string(&sev).unwrap();
            let parsed: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, sev);
        }
    }

    #[test]
    fn test_severity_deserialize_invalid() {
        let result: Result<Severity, _> = serde_json::from_str(r#""blocker""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_codes_listed_once() {
        let mut seen = std::collections::HashSet::new();
        for code in RuleCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {code}");
        }
        assert_eq!(seen.len(), 12);
    }
}
