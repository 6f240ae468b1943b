//! Rendering and file export for generated aliases

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AliasForgeError, Result};
use crate::types::CanonicalAddress;

/// Supported output renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Newline-joined plain list, one alias per line
    Txt,
    /// Self-contained styled HTML document
    Html,
    /// Pretty-printed JSON report
    Json,
}

impl ExportFormat {
    /// File extension conventionally used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Infer a format from an output path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.to_lowercase().parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AliasForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(AliasForgeError::cli(format!(
                "Unknown format '{}' (expected txt, html or json)",
                other
            ))),
        }
    }
}

/// A finished generation run, ready to render or persist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasReport {
    /// Address the run started from, exactly as supplied
    pub source: String,
    /// Canonical username the variants were derived from
    pub username: String,
    /// Domain shared by every alias
    pub domain: String,
    /// Number of aliases in the report
    pub count: usize,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Clamp notice from the sampling path, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// The aliases, deduplicated and sorted
    pub aliases: Vec<String>,
}

impl AliasReport {
    /// Create a report for a generation run
    pub fn new(address: &CanonicalAddress, aliases: Vec<String>, notice: Option<String>) -> Self {
        Self {
            source: address.original(),
            username: address.username.clone(),
            domain: address.domain.clone(),
            count: aliases.len(),
            generated_at: Utc::now(),
            notice,
            aliases,
        }
    }

    /// Render the report in the requested format
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Txt => Ok(self.render_txt()),
            ExportFormat::Html => Ok(self.render_html()),
            ExportFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                AliasForgeError::internal(format!("Failed to serialize report: {}", e))
            }),
        }
    }

    fn render_txt(&self) -> String {
        let mut out = self.aliases.join("\n");
        out.push('\n');
        out
    }

    fn render_html(&self) -> String {
        let items = self
            .aliases
            .iter()
            .map(|alias| format!("      <li><pre>{}</pre></li>", escape_html(alias)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Email Aliases</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background-color: #f4f4f9; color: #333; line-height: 1.6; padding: 20px; }}
        .container {{ max-width: 800px; margin: auto; background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }}
        h1 {{ color: #444; }}
        ul {{ list-style-type: none; padding: 0; }}
        li {{ background: #eee; margin-bottom: 5px; padding: 10px; border-radius: 4px; }}
        pre {{ margin: 0; white-space: pre-wrap; word-wrap: break-word; font-family: "Menlo", "Consolas", monospace; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Generated Email Aliases ({count})</h1>
        <ul>
{items}
        </ul>
    </div>
</body>
</html>
"#,
            count = self.count,
            items = items,
        )
    }
}

/// Render and write a report to a file, creating parent directories
pub fn write_report(report: &AliasReport, format: ExportFormat, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AliasForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }
    }

    let content = report.render(format)?;

    std::fs::write(path, content).map_err(|e| {
        AliasForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    tracing::info!(path = %path.display(), format = %format, "Wrote alias report");
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
