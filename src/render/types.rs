//! Rendered response types

use crate::render::format::to_fixed;
use serde::{Deserialize, Serialize};

/// Which download link a URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Source,
    Lossless,
    Lossy,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Source => write!(f, "source"),
            LinkKind::Lossless => write!(f, "lossless"),
            LinkKind::Lossy => write!(f, "lossy"),
        }
    }
}

/// Comparison of a compressed variant against the source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    /// Variant size in bytes
    pub size: u64,
    /// Variant size, formatted
    pub size_text: String,
    /// Absolute byte difference from the source
    pub diff: u64,
    /// Byte difference, formatted
    pub diff_text: String,
    /// `100 - min/max * 100`
    pub savings_percent: f64,
}

/// Links revealed after a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLinks {
    pub source: String,
    pub lossless: String,
    pub lossy: Option<String>,
}

impl DownloadLinks {
    /// Links that should be visible, in display order
    pub fn visible(&self) -> Vec<(LinkKind, &str)> {
        let mut links = vec![
            (LinkKind::Source, self.source.as_str()),
            (LinkKind::Lossless, self.lossless.as_str()),
        ];
        if let Some(lossy) = &self.lossy {
            links.push((LinkKind::Lossy, lossy.as_str()));
        }
        links
    }
}

/// Everything the view needs to present a completed upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedSummary {
    pub source_size: u64,
    pub source_text: String,
    pub lossless: SizeReport,
    pub lossy: Option<SizeReport>,
    pub links: DownloadLinks,
}

impl RenderedSummary {
    /// Status lines, one per row of the summary
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Original File Size: {}", self.source_text),
            format!("Compressed File Size: {}", self.lossless.size_text),
            format!(
                "Saved: {} ({}%)",
                self.lossless.diff_text,
                to_fixed(self.lossless.savings_percent, 2)
            ),
        ];

        if let Some(lossy) = &self.lossy {
            lines.push(format!("Lossy File Size: {}", lossy.size_text));
            lines.push(format!(
                "Lossy Saved: {} ({}%)",
                lossy.diff_text,
                to_fixed(lossy.savings_percent, 2)
            ));
        }

        lines
    }

    /// The full status text
    pub fn status_text(&self) -> String {
        self.status_lines().join("\n")
    }
}
