//! Declarative control-panel model.
//!
//! A platform-agnostic description of the simulator controls, analogous to
//! a list of draw commands: the hosting UI renders buttons from the model
//! and feeds the attached [`ControlAction`] back through [`apply_action`].
//! The panel owns no state of its own.

use crate::{DeviceCatalog, DeviceClass, SimulatorState};

/// An affordance exposed by the panel. Each maps onto exactly one
/// simulator or popout operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlAction {
    /// Pick a device from the catalog
    SelectDevice(String),
    /// Flip portrait/landscape (absent for desktop devices)
    ToggleOrientation,
    /// Flip fullscreen mode
    ToggleFullscreen,
    /// Open the standalone popout window (dispatched by the host through
    /// [`crate::popout::open_popout`], not a state transition)
    OpenPopout,
}

/// One device picker button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceButton {
    pub device_id: String,
    /// Short label, the first word of the device name
    pub label: String,
    pub selected: bool,
}

/// Device buttons for one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceGroup {
    pub class: DeviceClass,
    pub buttons: Vec<DeviceButton>,
}

/// Snapshot of every control the panel shows for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlPanelModel {
    /// Picker groups in catalog order: mobile, tablet, desktop
    pub groups: Vec<DeviceGroup>,
    /// Label for the orientation toggle (the orientation it switches to),
    /// or `None` when the selected device does not rotate
    pub orientation_toggle: Option<String>,
    /// "Fullscreen" or "Exit Fullscreen"
    pub fullscreen_label: String,
    /// Label for the popout button
    pub popout_label: String,
    /// Status line, e.g. `Current: iPad Air (820 x 1180px)`
    pub status: String,
}

impl ControlPanelModel {
    /// Build the model for the current state.
    pub fn build(catalog: &DeviceCatalog, state: &SimulatorState) -> Self {
        let groups = DeviceClass::ALL
            .iter()
            .map(|&class| DeviceGroup {
                class,
                buttons: catalog
                    .by_class(class)
                    .map(|profile| DeviceButton {
                        device_id: profile.id.clone(),
                        label: profile.short_label().to_string(),
                        selected: profile.id == state.profile().id,
                    })
                    .collect(),
            })
            .collect();

        let orientation_toggle = state
            .can_rotate()
            .then(|| capitalize(state.orientation().flipped().as_str()));

        let fullscreen_label = if state.is_fullscreen() {
            "Exit Fullscreen".to_string()
        } else {
            "Fullscreen".to_string()
        };

        // Desktop devices show the name only; effective dimensions matter
        // for the rotatable classes.
        let profile = state.profile();
        let status = if state.can_rotate() {
            let (width, height) = state.effective_dimensions();
            format!("Current: {} ({} x {}px)", profile.name, width, height)
        } else {
            format!("Current: {}", profile.name)
        };

        Self {
            groups,
            orientation_toggle,
            fullscreen_label,
            popout_label: "Open in New Window".to_string(),
            status,
        }
    }
}

/// Apply a panel action to the simulator state.
///
/// Returns `true` when the state changed. Unknown device ids and
/// [`ControlAction::OpenPopout`] are no-ops here; the popout is a side
/// effect the host dispatches separately.
pub fn apply_action(
    state: &mut SimulatorState,
    catalog: &DeviceCatalog,
    action: &ControlAction,
) -> bool {
    match action {
        ControlAction::SelectDevice(id) => match catalog.find_by_id(id) {
            Some(profile) => {
                state.select_device(profile);
                true
            }
            None => false,
        },
        ControlAction::ToggleOrientation => state.toggle_orientation(),
        ControlAction::ToggleFullscreen => {
            state.toggle_fullscreen();
            true
        }
        ControlAction::OpenPopout => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
