//! Popout controller: open a second, independently-sized browser
//! presentation of the view being configured.
//!
//! Window creation is abstracted behind [`PresentationHost`], so the reuse
//! and geometry logic is unit-testable without a real browser. Every failure
//! path here has a silent fallback: the inline view never depends on a
//! popout succeeding.

use url::Url;

use crate::frame::effective_dimensions;
use crate::{DeviceCatalog, Orientation};

/// Route serving the chrome-less standalone rendering of an app.
pub const POPOUT_ROUTE: &str = "/standalone";

/// Extra pixels added to each popout dimension for the host window's own
/// chrome (title bar, scrollbars).
pub const POPOUT_CHROME_ALLOWANCE: u32 = 50;

const DEFAULT_LIBRARY: &str = "shadcn";
const DEFAULT_APP: &str = "dashboard";

/// Everything needed to derive a popout window: the simulator state fields
/// plus the ambient library/app context of the hosting page.
///
/// Derived at request time, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopoutRequest {
    /// UI-library variant being viewed (free-form, e.g. "heroui")
    pub library: String,
    /// Mock application being viewed (free-form, e.g. "dashboard")
    pub app: String,
    /// Device catalog id
    pub device_id: String,
    /// Current orientation
    pub orientation: Orientation,
}

impl PopoutRequest {
    /// Deterministic window name for open-by-name reuse.
    ///
    /// Equal requests always produce equal names, across calls and across
    /// processes, so the host environment's native reuse semantics apply.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use devicesim_core::{Orientation, PopoutRequest};
    ///
    /// let request = PopoutRequest {
    ///     library: "heroui".into(),
    ///     app: "dashboard".into(),
    ///     device_id: "iphone-14-pro".into(),
    ///     orientation: Orientation::Portrait,
    /// };
    /// assert_eq!(
    ///     request.window_name(),
    ///     "standalone-heroui-dashboard-iphone-14-pro-portrait"
    /// );
    /// ```
    pub fn window_name(&self) -> String {
        format!(
            "standalone-{}-{}-{}-{}",
            self.library, self.app, self.device_id, self.orientation
        )
    }

    /// Build the same-origin URL for the standalone route, encoding all
    /// four fields as query parameters.
    pub fn target_url(&self, origin: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(origin)?;
        url.set_path(POPOUT_ROUTE);
        url.query_pairs_mut()
            .clear()
            .append_pair("device", &self.device_id)
            .append_pair("library", &self.library)
            .append_pair("app", &self.app)
            .append_pair("orientation", self.orientation.as_str());
        Ok(url)
    }

    /// Reconstruct a request from a standalone-route URL.
    ///
    /// Total: an unknown device id or invalid orientation degrades through
    /// the catalog resolver, and missing library/app fall back to the
    /// reference defaults ("shadcn" / "dashboard"). A request built by
    /// [`Self::target_url`] from valid catalog data round-trips exactly.
    pub fn from_url(url: &Url, catalog: &DeviceCatalog) -> Self {
        let mut device = None;
        let mut library = None;
        let mut app = None;
        let mut orientation = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "device" => device = Some(value.into_owned()),
                "library" => library = Some(value.into_owned()),
                "app" => app = Some(value.into_owned()),
                "orientation" => orientation = Some(value.into_owned()),
                _ => {}
            }
        }

        let profile = catalog.resolve(device.as_deref());
        let orientation = catalog.resolve_orientation(profile, orientation.as_deref());
        Self {
            library: library.unwrap_or_else(|| DEFAULT_LIBRARY.to_string()),
            app: app.unwrap_or_else(|| DEFAULT_APP.to_string()),
            device_id: profile.id.clone(),
            orientation,
        }
    }
}

/// Outer window size for a popout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    /// Geometry for a request: the resolved device's effective dimensions
    /// plus the fixed chrome allowance.
    pub fn for_request(request: &PopoutRequest, catalog: &DeviceCatalog) -> Self {
        let profile = catalog.resolve(Some(&request.device_id));
        let (width, height) = effective_dimensions(profile, request.orientation);
        Self {
            width: width + POPOUT_CHROME_ALLOWANCE,
            height: height + POPOUT_CHROME_ALLOWANCE,
        }
    }

    /// Window-features string: sized, scrollable and resizable, with the
    /// browser toolbar, menubar, location bar and status bar suppressed.
    pub fn features(&self) -> String {
        format!(
            "width={},height={},scrollbars=yes,resizable=yes,location=no,menubar=no,toolbar=no,status=no",
            self.width, self.height
        )
    }
}

/// Narrow interface over the host environment's window management.
///
/// Window handles are treated as potentially invalid at every access: the
/// user may close a popout at any moment, so implementations must tolerate
/// `close`/`focus` on already-dead handles without panicking.
pub trait PresentationHost {
    type Handle;

    /// Open a named window at `url` with the given features string.
    ///
    /// Returns `None` when creation is refused (e.g. popup blocked).
    fn open_named(&self, url: &Url, name: &str, features: &str) -> Option<Self::Handle>;

    /// Locate an already-open window by name.
    fn find_by_name(&self, name: &str) -> Option<Self::Handle>;

    /// Whether the handle refers to a closed window.
    fn is_closed(&self, handle: &Self::Handle) -> bool;

    /// Close the window. Best effort; must tolerate dead handles.
    fn close(&self, handle: &Self::Handle);

    /// Bring the window to the front. Best effort.
    fn focus(&self, handle: &Self::Handle);
}

/// Open (or replace) the popout window for a request.
///
/// Any live window with the same name is closed first, so stale geometry or
/// content from a previous device/orientation choice is never left behind,
/// and repeated identical requests keep at most one window alive. The new
/// window is focused best-effort.
///
/// Returns the new handle, or `None` when the host refused to open one.
/// No failure in this path propagates to the caller.
pub fn open_popout<H: PresentationHost>(
    host: &H,
    catalog: &DeviceCatalog,
    origin: &str,
    request: &PopoutRequest,
) -> Option<H::Handle> {
    let name = request.window_name();
    let url = match request.target_url(origin) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("popout: invalid origin {:?}: {}", origin, err);
            return None;
        }
    };

    if let Some(existing) = host.find_by_name(&name) {
        if !host.is_closed(&existing) {
            host.close(&existing);
        }
    }

    let geometry = WindowGeometry::for_request(request, catalog);
    match host.open_named(&url, &name, &geometry.features()) {
        Some(handle) => {
            host.focus(&handle);
            Some(handle)
        }
        None => {
            log::debug!("popout: window creation refused for {:?}", name);
            None
        }
    }
}

/// Browser-backed presentation host.
#[cfg(feature = "web")]
pub mod web {
    use super::*;
    use web_sys::Window;

    /// [`PresentationHost`] over the browser window that hosts the
    /// simulator view.
    #[derive(Clone, Debug)]
    pub struct BrowserHost {
        window: Window,
    }

    impl BrowserHost {
        /// Wrap the current browser window.
        ///
        /// Returns `None` outside a browsing context (e.g. a worker).
        pub fn from_current_window() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }

        /// Same-origin base for popout URLs.
        pub fn origin(&self) -> Option<String> {
            self.window.location().origin().ok()
        }
    }

    impl PresentationHost for BrowserHost {
        type Handle = Window;

        fn open_named(&self, url: &Url, name: &str, features: &str) -> Option<Window> {
            self.window
                .open_with_url_and_target_and_features(url.as_str(), name, features)
                .ok()
                .flatten()
        }

        fn find_by_name(&self, name: &str) -> Option<Window> {
            // Opening a blank URL by name returns the existing context when
            // one is live; otherwise it materializes an empty one, which the
            // replace-before-reopen step in `open_popout` closes anyway.
            self.window
                .open_with_url_and_target("", name)
                .ok()
                .flatten()
        }

        fn is_closed(&self, handle: &Window) -> bool {
            handle.closed()
        }

        fn close(&self, handle: &Window) {
            let _ = handle.close();
        }

        fn focus(&self, handle: &Window) {
            let _ = handle.focus();
        }
    }

    /// Convenience: open a popout from the current browser window, deriving
    /// the origin from its location. Returns `None` when not in a browsing
    /// context or when creation is refused.
    pub fn open_popout_from_browser(
        catalog: &DeviceCatalog,
        request: &PopoutRequest,
    ) -> Option<Window> {
        let host = BrowserHost::from_current_window()?;
        let origin = host.origin()?;
        open_popout(&host, catalog, &origin, request)
    }
}
