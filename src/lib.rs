//! # devicesim-core
//!
//! Core device simulation and responsive framing library for UI showcase
//! viewers.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - A read-only catalog of named device profiles (mobile/tablet/desktop)
//! - Total resolution of untrusted device and orientation parameters
//! - Orientation-aware frame geometry and chrome (bezel/notch) selection
//! - Opening and reusing popout windows through a narrow presentation-host
//!   interface
//! - A declarative control-panel model for hosting UIs
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Enable loading custom device catalogs from TOML
//! - `web` - Enable browser window support for the popout controller
//!
//! ## Example
//!
//! ```rust
//! use devicesim_core::{DeviceCatalog, Orientation, SimulatorState};
//!
//! let catalog = DeviceCatalog::builtin();
//!
//! // Resolve an untrusted query parameter; never fails
//! let profile = catalog.resolve(Some("iphone-14-pro"));
//!
//! // Track view state and derive the frame layout
//! let mut state = SimulatorState::new(profile);
//! state.toggle_orientation();
//! let layout = state.layout();
//! assert_eq!(layout.content_box(), (844, 390));
//!
//! // Derive a popout request for the current configuration
//! let request = state.popout_request("heroui", "dashboard");
//! let url = request.target_url("https://example.com").unwrap();
//! assert!(url.as_str().starts_with("https://example.com/standalone?"));
//! ```

mod catalog;
mod device;
pub mod frame;
mod panel;
pub mod popout;
mod simulator;

pub use catalog::{DeviceCatalog, DEFAULT_DEVICE_ID};
pub use device::{DeviceClass, DeviceProfile, Orientation};
pub use frame::{ChromeMetrics, ChromeStyle, FrameLayout, NotchMetrics};
pub use panel::{apply_action, ControlAction, ControlPanelModel, DeviceButton, DeviceGroup};
pub use popout::{
    open_popout, PopoutRequest, PresentationHost, WindowGeometry, POPOUT_CHROME_ALLOWANCE,
    POPOUT_ROUTE,
};
pub use simulator::SimulatorState;

#[cfg(feature = "web")]
pub use popout::web::{open_popout_from_browser, BrowserHost};
