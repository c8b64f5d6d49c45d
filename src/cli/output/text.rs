use owo_colors::OwoColorize;

use crate::types::{Report, Severity};

pub fn render(report: &Report) {
    if report.findings.is_empty() {
        println!();
        println!("  {}", "\u{2501}".repeat(50).dimmed());
        println!("  {}", "no issues found".green());
        println!();
        return;
    }

    for finding in &report.findings {
        let line = finding.rendered();
        match finding.severity {
            Severity::Critical => println!("{}", line.red().bold()),
            Severity::Major => println!("{}", line.red()),
            Severity::Minor => println!("{}", line.yellow()),
            Severity::Info => println!("{}", line.blue()),
        }
    }

    let mut parts = Vec::new();
    let critical = report.critical_count();
    let major = report.major_count();
    let minor = report.minor_count();
    let info = report.info_count();
    if critical > 0 {
        parts.push(format!("{critical} critical").red().bold().to_string());
    }
    if major > 0 {
        parts.push(format!("{major} major").red().to_string());
    }
    if minor > 0 {
        parts.push(format!("{minor} minor").yellow().to_string());
    }
    if info > 0 {
        parts.push(format!("{info} info").blue().to_string());
    }

    println!();
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    println!("  {}", parts.join(", "));
    println!("  {}", "\u{2501}".repeat(50).dimmed());
    println!();
}
