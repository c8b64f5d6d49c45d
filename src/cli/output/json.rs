use serde::Serialize;

use crate::types::{Finding, Report};

#[derive(Serialize)]
struct JsonOutput<'a> {
    findings: &'a [Finding],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    critical: usize,
    major: usize,
    minor: usize,
    info: usize,
}

fn build_output(report: &Report) -> JsonOutput<'_> {
    JsonOutput {
        findings: &report.findings,
        summary: JsonSummary {
            critical: report.critical_count(),
            major: report.major_count(),
            minor: report.minor_count(),
            info: report.info_count(),
        },
    }
}

pub fn render(report: &Report) {
    let output = build_output(report);
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RuleCode, Severity};

    #[test]
    fn test_json_output_is_valid() {
        let report = Report {
            findings: vec![Finding {
                file: "Dockerfile".to_string(),
                line: Some(10),
                severity: Severity::Critical,
                code: RuleCode::Dl001,
                message: "sensitive file".to_string(),
            }],
        };

        let output = build_output(&report);
        let json = serde_json::to_string_pretty(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["summary"]["critical"], 1);
        assert_eq!(parsed["findings"][0]["code"], "DL001");
        assert_eq!(parsed["findings"][0]["line"], 10);
    }

    #[test]
    fn test_file_scope_finding_serializes_null_line() {
        let report = Report {
            findings: vec![Finding {
                file: "Dockerfile".to_string(),
                line: None,
                severity: Severity::Info,
                code: RuleCode::Dl009,
                message: "no healthcheck".to_string(),
            }],
        };

        let output = build_output(&report);
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&output).unwrap()).unwrap();
        assert!(parsed["findings"][0]["line"].is_null());
    }
}
