//! Click scripts
//!
//! A script is a JSON list of steps replayed against the host state:
//!
//! ```json
//! [{ "click": "btn5" }, { "wait_ms": 400 }, { "snapshot": "Profile" }]
//! ```
use serde::{Deserialize, Serialize};
use std::time::Duration;

use tabflow_core::ElementSnapshot;

use crate::state::AppState;

/// Frame length used to play out waits
pub const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Click(String),
    WaitMs(u64),
    Remove(String),
    Snapshot(String),
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: Step,
    pub success: bool,
    pub current_tab: usize,
    pub open_popup: Option<String>,
    pub animating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<ElementSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn default_script() -> Vec<Step> {
    vec![
        Step::Click("btn5".to_string()),
        Step::WaitMs(400),
        Step::Snapshot("TabsContainer".to_string()),
        Step::Click("btn3".to_string()),
        Step::WaitMs(150),
        Step::Click("profile".to_string()),
        Step::WaitMs(100),
        Step::Click("settings".to_string()),
        Step::WaitMs(300),
        Step::Snapshot("Profile".to_string()),
        Step::Snapshot("Settings".to_string()),
        Step::Click("xButton".to_string()),
        Step::WaitMs(300),
        Step::Snapshot("xButton".to_string()),
    ]
}

pub fn run_step(state: &AppState, step: Step) -> StepReport {
    let mut snapshot = None;
    let result = match &step {
        Step::Click(name) => state
            .find(name)
            .map(|element| {
                let actions = state.click(element);
                tracing::info!(element = %name, actions = actions, "Click");
            })
            .ok_or_else(|| format!("No element named {}", name)),
        Step::WaitMs(millis) => {
            play(state, Duration::from_millis(*millis));
            Ok(())
        }
        Step::Remove(name) => state
            .find(name)
            .map(|element| state.remove(element))
            .ok_or_else(|| format!("No element named {}", name)),
        Step::Snapshot(name) => state
            .find(name)
            .and_then(|element| state.with_tree(|tree| tree.snapshot(element)))
            .map(|s| snapshot = Some(s))
            .ok_or_else(|| format!("No element named {}", name)),
    };

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Step failed");
    }

    state.with_controller(|controller| StepReport {
        step,
        success: result.is_ok(),
        current_tab: controller.current_tab(),
        open_popup: controller.open_popup_name().map(str::to_string),
        animating: controller.is_animating(),
        snapshot,
        error: result.err(),
    })
}

/// Tick whole frames covering `total`, then the remainder.
fn play(state: &AppState, total: Duration) {
    let mut remaining = total;
    while remaining >= FRAME {
        state.tick(FRAME);
        remaining -= FRAME;
    }
    if !remaining.is_zero() {
        state.tick(remaining);
    }
}
