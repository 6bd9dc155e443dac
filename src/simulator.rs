//! Simulator view state and its transitions.

use crate::{
    frame::{effective_dimensions, FrameLayout},
    DeviceCatalog, DeviceProfile, Orientation, PopoutRequest,
};

/// Transient state owned by one simulator view.
///
/// Created on mount from a caller-supplied default profile and mutated only
/// through the explicit transitions below; never persisted. The controller
/// holds its own copy of the selected profile, so it stays valid however
/// long the catalog that produced it lives.
///
/// ## Example
///
/// ```rust
/// use devicesim_core::{DeviceCatalog, Orientation, SimulatorState};
///
/// let catalog = DeviceCatalog::builtin();
/// let mut state = SimulatorState::from_catalog(&catalog);
/// assert_eq!(state.profile().id, "ipad-air");
///
/// state.toggle_orientation();
/// assert_eq!(state.orientation(), Orientation::Landscape);
/// assert_eq!(state.effective_dimensions(), (1180, 820));
///
/// // Picking a device resets orientation to that device's default
/// let phone = catalog.find_by_id("iphone-14-pro").unwrap();
/// state.select_device(phone);
/// assert_eq!(state.orientation(), Orientation::Portrait);
/// ```
#[derive(Clone, Debug)]
pub struct SimulatorState {
    profile: DeviceProfile,
    orientation: Orientation,
    fullscreen: bool,
}

impl SimulatorState {
    /// Create state for the given starting profile, at its default
    /// orientation, windowed.
    pub fn new(profile: &DeviceProfile) -> Self {
        Self {
            profile: profile.clone(),
            orientation: profile.default_orientation,
            fullscreen: false,
        }
    }

    /// Create state starting at the catalog's default profile.
    pub fn from_catalog(catalog: &DeviceCatalog) -> Self {
        Self::new(catalog.default_profile())
    }

    /// The currently selected profile.
    #[inline]
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// The current orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the view is in fullscreen mode.
    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the orientation toggle is available for the current device.
    #[inline]
    pub fn can_rotate(&self) -> bool {
        self.profile.rotatable()
    }

    /// Select a device, resetting orientation to that device's default.
    pub fn select_device(&mut self, profile: &DeviceProfile) {
        self.orientation = profile.default_orientation;
        self.profile = profile.clone();
    }

    /// Flip orientation, unless the current device is a desktop.
    ///
    /// Returns `true` when the orientation changed.
    pub fn toggle_orientation(&mut self) -> bool {
        if !self.can_rotate() {
            return false;
        }
        self.orientation = self.orientation.flipped();
        true
    }

    /// Flip the fullscreen flag.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Pixel dimensions the content renders at, after any orientation swap.
    #[inline]
    pub fn effective_dimensions(&self) -> (u32, u32) {
        effective_dimensions(&self.profile, self.orientation)
    }

    /// Full frame layout (content box plus chrome) for the current state.
    pub fn layout(&self) -> FrameLayout {
        FrameLayout::compute(&self.profile, self.orientation)
    }

    /// Compose a popout request from the current state and the ambient
    /// library/app context supplied by the hosting page.
    pub fn popout_request(
        &self,
        library: impl Into<String>,
        app: impl Into<String>,
    ) -> PopoutRequest {
        PopoutRequest {
            library: library.into(),
            app: app.into(),
            device_id: self.profile.id.clone(),
            orientation: self.orientation,
        }
    }
}
