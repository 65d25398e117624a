// File: src/output.rs
// Purpose: Rendering of validation verdicts

use anyhow::Result;
use colored::Colorize;
use credcheck::{PasswordReport, PasswordRule};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Email,
    Password,
}

impl Subject {
    fn label(self) -> &'static str {
        match self {
            Subject::Email => "Email",
            Subject::Password => "Password",
        }
    }
}

/// Result of one check, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub subject: Subject,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<PasswordRule>,
}

impl Verdict {
    pub fn email(valid: bool) -> Self {
        Self {
            subject: Subject::Email,
            valid,
            failed: Vec::new(),
        }
    }

    pub fn password(report: PasswordReport) -> Self {
        Self {
            subject: Subject::Password,
            valid: report.is_strong(),
            failed: report.into_failures(),
        }
    }
}

/// Renders verdicts in the requested format
pub fn render(verdicts: &[Verdict], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(verdicts, color)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(verdicts)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(verdicts: &[Verdict], color: bool) -> String {
    let mut out = String::new();

    for verdict in verdicts {
        let status = if verdict.valid { "valid" } else { "invalid" };
        let line = format!("{} is {}.", verdict.subject.label(), status);

        if color {
            let mark = if verdict.valid { "✓".green() } else { "✗".red() };
            out.push_str(&format!("{} {}\n", mark, line));
        } else {
            out.push_str(&line);
            out.push('\n');
        }

        for rule in &verdict.failed {
            let detail = format!("  - {}", rule.description());
            if color {
                out.push_str(&format!("{}\n", detail.dimmed()));
            } else {
                out.push_str(&detail);
                out.push('\n');
            }
        }
    }

    out
}
