//! Controller configuration
//!
//! Fixed per deployment. Every field has a default matching the stock
//! five-tab layout, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use tabflow_popups::{PopupEntry, PopupSettings};
use tabflow_tabs::{SlideLayout, TabSettings};
use tabflow_tween::{Easing, Motion};

use crate::bounce::BounceSettings;
use crate::error::CoreError;
use crate::Result;

/// Longest accepted transition, in seconds
pub const MAX_DURATION_SECS: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Length in seconds
    pub duration_secs: f32,
    pub easing: Easing,
}

impl AnimationSettings {
    pub fn new(duration_secs: f32, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }

    pub fn motion(&self) -> Motion {
        Motion::from_secs(self.duration_secs, self.easing.clone())
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self::new(0.25, Easing::EaseInOut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Popup scale-in
    pub popup: AnimationSettings,
    /// Container slide between tabs
    pub tab_slide: AnimationSettings,
    /// Nav icon lift
    pub icon_slide: AnimationSettings,
    /// Button press pulse
    pub bounce: AnimationSettings,
    /// Peak scale of the press pulse
    pub bounce_scale: f32,
    /// Container offset step between adjacent tabs, in percent
    pub slide_distance_percent: f32,
    /// Container offset of tab 0, in percent
    pub base_offset_percent: f32,
    pub icon_raised_offset: f32,
    pub icon_rest_offset: f32,
    /// Vertical offset closed popups are parked at
    pub offscreen_offset: f32,
    pub initial_tab: usize,

    pub container: String,
    pub nav_bar: String,
    pub close_button: String,
    pub tabs: Vec<String>,
    pub nav_buttons: Vec<String>,
    /// Path from the root to the element holding the popup triggers
    pub trigger_scope: Vec<String>,
    pub popups: Vec<PopupEntry>,

    pub active_class: String,
    pub hidden_class: String,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tabs.is_empty() {
            return Err(CoreError::Config("At least one tab is required".to_string()));
        }

        if self.nav_buttons.len() != self.tabs.len() {
            return Err(CoreError::Config(format!(
                "Expected {} nav buttons, found {}",
                self.tabs.len(),
                self.nav_buttons.len()
            )));
        }

        for (label, settings) in [
            ("popup", &self.popup),
            ("tab_slide", &self.tab_slide),
            ("icon_slide", &self.icon_slide),
            ("bounce", &self.bounce),
        ] {
            let secs = settings.duration_secs;
            if !(0.0..=MAX_DURATION_SECS).contains(&secs) {
                return Err(CoreError::Config(format!(
                    "Invalid {} duration: {}",
                    label, secs
                )));
            }
        }

        let offsets = [
            self.bounce_scale,
            self.slide_distance_percent,
            self.base_offset_percent,
            self.icon_raised_offset,
            self.icon_rest_offset,
            self.offscreen_offset,
        ];
        if offsets.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::Config(
                "Scale and offset values must be finite".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for popup in &self.popups {
            if !seen.insert(popup.name.as_str()) {
                return Err(CoreError::Config(format!(
                    "Duplicate popup name: {}",
                    popup.name
                )));
            }
        }

        Ok(())
    }

    pub fn tab_settings(&self) -> TabSettings {
        TabSettings {
            container: self.container.clone(),
            nav_bar: self.nav_bar.clone(),
            tabs: self.tabs.clone(),
            nav_buttons: self.nav_buttons.clone(),
            initial_tab: self.initial_tab,
            layout: SlideLayout {
                base_offset: self.base_offset_percent,
                step: self.slide_distance_percent,
            },
            slide: self.tab_slide.motion(),
            icon: self.icon_slide.motion(),
            icon_raised: self.icon_raised_offset,
            icon_rest: self.icon_rest_offset,
            active_class: self.active_class.clone(),
        }
    }

    pub fn popup_settings(&self) -> PopupSettings {
        PopupSettings {
            close_button: self.close_button.clone(),
            trigger_scope: self.trigger_scope.clone(),
            popups: self.popups.clone(),
            motion: self.popup.motion(),
            offscreen_offset: self.offscreen_offset,
            active_class: self.active_class.clone(),
            hidden_class: self.hidden_class.clone(),
        }
    }

    pub fn bounce_settings(&self) -> BounceSettings {
        BounceSettings {
            motion: self.bounce.motion(),
            peak_scale: self.bounce_scale,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let popups = PopupSettings::default().popups;

        Self {
            popup: AnimationSettings::new(0.25, Easing::EaseInOut),
            tab_slide: AnimationSettings::new(0.3, Easing::EaseInOut),
            icon_slide: AnimationSettings::new(0.3, Easing::EaseInOut),
            bounce: AnimationSettings::new(0.25, Easing::EaseInOut),
            bounce_scale: 1.2,
            slide_distance_percent: 100.0,
            base_offset_percent: 200.0,
            icon_raised_offset: -80.0,
            icon_rest_offset: 0.0,
            offscreen_offset: -3000.0,
            initial_tab: 2,
            container: "TabsContainer".to_string(),
            nav_bar: "TabSwitcher".to_string(),
            close_button: "xButton".to_string(),
            tabs: (1..=5).map(|i| format!("tab{}", i)).collect(),
            nav_buttons: (1..=5).map(|i| format!("btn{}", i)).collect(),
            trigger_scope: vec![
                "TabsContainer".to_string(),
                "tab3".to_string(),
                "topbar".to_string(),
            ],
            popups,
            active_class: "active".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.tabs.len(), 5);
        assert_eq!(config.popups.len(), 5);
        assert_eq!(config.tab_settings().layout.offset(2), 0.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(
            r#"{
                "initial_tab": 0,
                "tab_slide": { "duration_secs": 0.5, "easing": "ease_out" },
                "bounce": { "duration_secs": 0.1 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial_tab, 0);
        assert_eq!(config.tab_slide.easing, Easing::EaseOut);
        assert_eq!(config.tab_settings().slide.duration, Duration::from_millis(500));
        assert_eq!(config.bounce.easing, Easing::EaseInOut);
        assert_eq!(config.bounce_scale, 1.2);
        assert_eq!(config.close_button, "xButton");
    }

    #[test]
    fn test_keyframe_curve_from_json() {
        let config = Config::from_json_str(
            r#"{ "popup": { "duration_secs": 0.2, "easing": { "curve": [
                { "time": 0.0, "value": 0.0 },
                { "time": 0.7, "value": 1.1 },
                { "time": 1.0, "value": 1.0 }
            ] } } }"#,
        )
        .unwrap();
        assert!(matches!(config.popup.easing, Easing::Curve(_)));
    }

    #[test]
    fn test_rejects_mismatched_nav_buttons() {
        let json = r#"{ "nav_buttons": ["btn1", "btn2"] }"#;
        let err = Config::from_json_str(json).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_tabs() {
        let json = r#"{ "tabs": [], "nav_buttons": [] }"#;
        assert!(Config::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_negative_duration() {
        let mut config = Config::default();
        config.icon_slide.duration_secs = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("icon_slide"));
    }

    #[test]
    fn test_rejects_oversized_duration() {
        let json = r#"{ "tab_slide": { "duration_secs": 1e30 } }"#;
        let err = Config::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("tab_slide"));

        let mut config = Config::default();
        config.popup.duration_secs = MAX_DURATION_SECS;
        config.validate().unwrap();
        config.popup.duration_secs = MAX_DURATION_SECS + 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unvalidated_oversized_duration_does_not_panic() {
        let mut config = Config::default();
        config.tab_slide.duration_secs = 1e30;
        assert!(config.tab_settings().slide.duration.is_zero());
    }

    #[test]
    fn test_rejects_duplicate_popups() {
        let mut config = Config::default();
        config.popups.push(PopupEntry::new("Money", "money2"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let mut config = Config::default();
        config.bounce_scale = 1.5;
        config.initial_tab = 4;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/tabflow.json").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
