//! Pill model: maps a performance label to badge classes and tooltip copy
//!
//! Rendering is pure. The Leptos `PillCell` component and the server-side
//! dashboard both go through [`Pill::render`], so the markup they produce
//! agrees on classes, tooltip text and attachment keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used for attachment keys when no custom prefix is given
pub const DEFAULT_ID_PREFIX: &str = "pill";

/// Performance impact of running a scheduled query, as classified upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceImpact {
    Minimal,
    Considerable,
    Excessive,
    Undetermined,
    Denylisted,
}

impl PerformanceImpact {
    pub const ALL: [PerformanceImpact; 5] = [
        PerformanceImpact::Minimal,
        PerformanceImpact::Considerable,
        PerformanceImpact::Excessive,
        PerformanceImpact::Undetermined,
        PerformanceImpact::Denylisted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PerformanceImpact::Minimal => "Minimal",
            PerformanceImpact::Considerable => "Considerable",
            PerformanceImpact::Excessive => "Excessive",
            PerformanceImpact::Undetermined => "Undetermined",
            PerformanceImpact::Denylisted => "Denylisted",
        }
    }

    /// Whether hovering the pill opens its tooltip.
    ///
    /// Denylisted queries carry tooltip copy but the trigger stays disabled.
    pub fn tooltip_enabled(self) -> bool {
        match self {
            PerformanceImpact::Minimal
            | PerformanceImpact::Considerable
            | PerformanceImpact::Excessive
            | PerformanceImpact::Undetermined => true,
            PerformanceImpact::Denylisted => false,
        }
    }

    /// Tooltip copy, one entry per overlay line.
    ///
    /// `host_details` switches the Undetermined copy from "at least one host"
    /// to "this host" when the pill is shown on a single host's page.
    pub fn tooltip_lines(self, host_details: bool) -> Vec<String> {
        let lines: [&str; 4] = match self {
            PerformanceImpact::Minimal => [
                "Running this query very",
                "frequently has little to no",
                "impact on your device’s",
                "performance.",
            ],
            PerformanceImpact::Considerable => [
                "Running this query",
                "frequently can have a",
                "noticeable impact on your",
                "device’s performance.",
            ],
            PerformanceImpact::Excessive => [
                "Running this query, even",
                "infrequently, can have a",
                "significant impact on your",
                "device’s performance.",
            ],
            PerformanceImpact::Denylisted => [
                "This query has been",
                "stopped from running",
                "because of excessive",
                "resource consumption.",
            ],
            PerformanceImpact::Undetermined => {
                let hosts = if host_details { "this" } else { "at least one" };
                return vec![
                    "To see performance".to_string(),
                    "impact, this query must".to_string(),
                    "run as a scheduled query".to_string(),
                    format!("on {} host.", hosts),
                ];
            }
        };
        lines.iter().map(|line| line.to_string()).collect()
    }
}

impl fmt::Display for PerformanceImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pill label: one of the known impacts, or free text shown as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PillLabel {
    Known(PerformanceImpact),
    Other(String),
}

impl PillLabel {
    /// Exact, case-sensitive match against the known vocabulary
    pub fn parse(label: &str) -> Self {
        PerformanceImpact::ALL
            .into_iter()
            .find(|impact| impact.as_str() == label)
            .map(PillLabel::Known)
            .unwrap_or_else(|| PillLabel::Other(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PillLabel::Known(impact) => impact.as_str(),
            PillLabel::Other(text) => text,
        }
    }

    pub fn impact(&self) -> Option<PerformanceImpact> {
        match self {
            PillLabel::Known(impact) => Some(*impact),
            PillLabel::Other(_) => None,
        }
    }

    pub fn tooltip_enabled(&self) -> bool {
        self.impact().is_some_and(PerformanceImpact::tooltip_enabled)
    }

    pub fn tooltip_lines(&self, host_details: bool) -> Vec<String> {
        self.impact()
            .map(|impact| impact.tooltip_lines(host_details))
            .unwrap_or_default()
    }
}

impl From<&str> for PillLabel {
    fn from(label: &str) -> Self {
        PillLabel::parse(label)
    }
}

impl fmt::Display for PillLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier a row hands to its pill, used to build the attachment key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PillId {
    Number(u64),
    Text(String),
}

impl PillId {
    /// An empty text id carries no identity and is replaced like a missing one
    fn is_blank(&self) -> bool {
        matches!(self, PillId::Text(text) if text.is_empty())
    }
}

impl fmt::Display for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PillId::Number(n) => write!(f, "{}", n),
            PillId::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for PillId {
    fn from(n: u64) -> Self {
        PillId::Number(n)
    }
}

impl From<u32> for PillId {
    fn from(n: u32) -> Self {
        PillId::Number(u64::from(n))
    }
}

impl From<String> for PillId {
    fn from(text: String) -> Self {
        PillId::Text(text)
    }
}

impl From<&str> for PillId {
    fn from(text: &str) -> Self {
        PillId::Text(text.to_string())
    }
}

/// CSS class suffix for a label: lowercased, first space replaced with a hyphen
///
/// Only the first space is replaced, so "Not Supported Yet" yields
/// `not-supported yet`.
pub fn class_tag(label: &str) -> String {
    label.replacen(' ', "-", 1).to_lowercase()
}

/// Key shared by a tooltip trigger and its overlay: `{prefix}__{id}`
///
/// An empty prefix falls back to [`DEFAULT_ID_PREFIX`].
pub fn attachment_key(prefix: Option<&str>, id: &str) -> String {
    let prefix = prefix
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(DEFAULT_ID_PREFIX);
    format!("{}__{}", prefix, id)
}

/// Input for rendering a single pill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    pub id: Option<PillId>,
    pub custom_id_prefix: Option<String>,
    pub host_details: bool,
}

impl Pill {
    pub fn new(label: impl Into<String>, id: Option<PillId>) -> Self {
        Self {
            label: label.into(),
            id,
            custom_id_prefix: None,
            host_details: false,
        }
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_id_prefix = Some(prefix.into());
        self
    }

    pub fn with_host_details(mut self, host_details: bool) -> Self {
        self.host_details = host_details;
        self
    }

    /// Render the pill. When no usable id was given a fresh v4 UUID is
    /// generated, once, so trigger and overlay agree on the key.
    pub fn render(&self) -> PillView {
        let label = PillLabel::parse(&self.label);
        let tag = class_tag(&self.label);

        let id = match &self.id {
            Some(id) if !id.is_blank() => id.to_string(),
            _ => uuid::Uuid::new_v4().to_string(),
        };

        PillView {
            label: self.label.clone(),
            class_name: format!("data-table__pill data-table__pill--{} tooltip", tag),
            tooltip_class: format!("tooltip {}__tooltip-text", tag),
            tooltip_enabled: label.tooltip_enabled(),
            tooltip_lines: label.tooltip_lines(self.host_details),
            attachment_key: attachment_key(self.custom_id_prefix.as_deref(), &id),
        }
    }
}

/// A rendered pill, ready to be turned into markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillView {
    pub label: String,
    pub class_name: String,
    pub tooltip_class: String,
    pub tooltip_enabled: bool,
    pub tooltip_lines: Vec<String>,
    pub attachment_key: String,
}

impl PillView {
    /// Tooltip copy on a single line
    pub fn tooltip_text(&self) -> String {
        self.tooltip_lines.join(" ")
    }
}
