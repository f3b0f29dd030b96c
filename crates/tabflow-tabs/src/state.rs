//! Tab State
//!
//! ```text
//! Inactive ⇄ Active
//! ```
//!
//! Exactly one tab of a switcher is `Active` once it is attached.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Tab is the visible panel
    Active,
    /// Tab is off to one side of the container
    #[default]
    Inactive,
}

impl TabState {
    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "inactive" => Ok(TabState::Inactive),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Active".parse::<TabState>(), Ok(TabState::Active));
        assert_eq!("inactive".parse::<TabState>(), Ok(TabState::Inactive));
        assert!("frozen".parse::<TabState>().is_err());
        assert_eq!(TabState::Active.to_string(), "active");
    }

    #[test]
    fn test_default_inactive() {
        assert!(!TabState::default().is_active());
    }
}
