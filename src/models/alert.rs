use serde::Deserialize;

/// An alert raised by the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<u64>,
    pub severity: String,
    pub message: String,
}

/// Display emphasis for an alert.
///
/// Only the exact tag `"High"` is singled out; unknown tags fall through to
/// `Standard` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    High,
    Standard,
}

impl Emphasis {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::High => "list-group-item-danger",
            Emphasis::Standard => "list-group-item-warning",
        }
    }
}

impl Alert {
    pub fn emphasis(&self) -> Emphasis {
        if self.severity == "High" {
            Emphasis::High
        } else {
            Emphasis::Standard
        }
    }

    /// Heading line, e.g. "High Priority"
    pub fn heading(&self) -> String {
        format!("{} Priority", self.severity)
    }
}
