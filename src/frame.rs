//! Frame geometry: orientation-aware dimensions and chrome selection.

use crate::{DeviceClass, DeviceProfile, Orientation};

/// Compute the pixel box content should occupy for a profile and orientation.
///
/// Landscape swaps the profile's canonical width/height for mobile and
/// tablet devices. Desktop profiles are already stored landscape-oriented
/// and are never swapped, whatever orientation is requested.
///
/// ## Example
///
/// ```rust
/// use devicesim_core::{DeviceCatalog, Orientation};
/// use devicesim_core::frame::effective_dimensions;
///
/// let catalog = DeviceCatalog::builtin();
/// let phone = catalog.find_by_id("iphone-14-pro").unwrap();
///
/// assert_eq!(effective_dimensions(phone, Orientation::Portrait), (390, 844));
/// assert_eq!(effective_dimensions(phone, Orientation::Landscape), (844, 390));
/// ```
pub fn effective_dimensions(profile: &DeviceProfile, orientation: Orientation) -> (u32, u32) {
    if orientation == Orientation::Landscape && profile.class.rotatable() {
        (profile.height, profile.width)
    } else {
        (profile.width, profile.height)
    }
}

/// Decorative frame style wrapped around the simulated content area.
///
/// Purely cosmetic: chrome adds a fixed margin outside the content box and
/// never affects the effective dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ChromeStyle {
    /// Rounded dark bezel with a notch indicator
    PhoneBezel,
    /// Thinner bezel, no notch
    TabletBezel,
    /// Neutral padded canvas, no bezel
    DesktopCanvas,
}

impl ChromeStyle {
    /// Select the chrome style for a device class.
    ///
    /// Total over the closed enum; no fallback branch exists.
    #[inline]
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => ChromeStyle::PhoneBezel,
            DeviceClass::Tablet => ChromeStyle::TabletBezel,
            DeviceClass::Desktop => ChromeStyle::DesktopCanvas,
        }
    }

    /// Fixed decorative measurements for this style.
    pub fn metrics(self) -> ChromeMetrics {
        match self {
            ChromeStyle::PhoneBezel => ChromeMetrics {
                bezel: 8,
                corner_radius: 40,
                notch: Some(NotchMetrics {
                    width: 80,
                    height: 20,
                    top_offset: 32,
                }),
            },
            ChromeStyle::TabletBezel => ChromeMetrics {
                bezel: 10,
                corner_radius: 8,
                notch: None,
            },
            ChromeStyle::DesktopCanvas => ChromeMetrics {
                bezel: 16,
                corner_radius: 8,
                notch: None,
            },
        }
    }

    /// Whether this style draws a notch indicator.
    #[inline]
    pub fn has_notch(self) -> bool {
        self.metrics().notch.is_some()
    }
}

/// Notch geometry, centered horizontally within the bezel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotchMetrics {
    pub width: u32,
    pub height: u32,
    /// Distance from the outer frame's top edge
    pub top_offset: u32,
}

/// Fixed decorative measurements for a chrome style, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChromeMetrics {
    /// Margin added on each side of the content box
    pub bezel: u32,
    /// Outer corner rounding
    pub corner_radius: u32,
    /// Notch indicator, phone chrome only
    pub notch: Option<NotchMetrics>,
}

/// Computed pixel layout for one frame: the content box plus its chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    /// Exact width the content is laid out at
    pub content_width: u32,
    /// Exact height the content is laid out at
    pub content_height: u32,
    /// Content width plus bezel on both sides
    pub outer_width: u32,
    /// Content height plus bezel on both sides
    pub outer_height: u32,
    /// Selected chrome style
    pub chrome: ChromeStyle,
}

impl FrameLayout {
    /// Compute the layout for a profile at an orientation.
    ///
    /// The content box is exactly [`effective_dimensions`]; chrome only adds
    /// a fixed margin outside it.
    pub fn compute(profile: &DeviceProfile, orientation: Orientation) -> Self {
        let (content_width, content_height) = effective_dimensions(profile, orientation);
        let chrome = ChromeStyle::for_class(profile.class);
        let bezel = chrome.metrics().bezel;
        Self {
            content_width,
            content_height,
            outer_width: content_width + bezel * 2,
            outer_height: content_height + bezel * 2,
            chrome,
        }
    }

    /// Content box as a (width, height) pair.
    #[inline]
    pub fn content_box(&self) -> (u32, u32) {
        (self.content_width, self.content_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceCatalog;

    fn profile(width: u32, height: u32, class: DeviceClass) -> DeviceProfile {
        let default_orientation = if class == DeviceClass::Desktop {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        DeviceProfile::new("test", "Test Device", width, height, class, default_orientation)
    }

    #[test]
    fn test_landscape_swaps_non_desktop() {
        for class in [DeviceClass::Mobile, DeviceClass::Tablet] {
            let p = profile(390, 844, class);
            let portrait = effective_dimensions(&p, Orientation::Portrait);
            let landscape = effective_dimensions(&p, Orientation::Landscape);
            assert_eq!(portrait, (390, 844));
            assert_eq!(landscape, (844, 390));
            assert_eq!(landscape, (portrait.1, portrait.0));
        }
    }

    #[test]
    fn test_desktop_orientation_lock() {
        let p = profile(1920, 1080, DeviceClass::Desktop);
        assert_eq!(effective_dimensions(&p, Orientation::Portrait), (1920, 1080));
        assert_eq!(effective_dimensions(&p, Orientation::Landscape), (1920, 1080));
    }

    #[test]
    fn test_chrome_per_class() {
        assert_eq!(ChromeStyle::for_class(DeviceClass::Mobile), ChromeStyle::PhoneBezel);
        assert_eq!(ChromeStyle::for_class(DeviceClass::Tablet), ChromeStyle::TabletBezel);
        assert_eq!(ChromeStyle::for_class(DeviceClass::Desktop), ChromeStyle::DesktopCanvas);

        assert!(ChromeStyle::PhoneBezel.has_notch());
        assert!(!ChromeStyle::TabletBezel.has_notch());
        assert!(!ChromeStyle::DesktopCanvas.has_notch());
    }

    #[test]
    fn test_layout_chrome_margin() {
        let catalog = DeviceCatalog::builtin();
        let phone = catalog.find_by_id("iphone-14-pro").unwrap();

        let layout = FrameLayout::compute(phone, Orientation::Portrait);
        assert_eq!(layout.content_box(), (390, 844));
        // Phone bezel is 8px per side
        assert_eq!((layout.outer_width, layout.outer_height), (406, 860));
        assert_eq!(layout.chrome, ChromeStyle::PhoneBezel);

        // Rotating swaps the content box but never resizes it
        let rotated = FrameLayout::compute(phone, Orientation::Landscape);
        assert_eq!(rotated.content_box(), (844, 390));
        assert_eq!((rotated.outer_width, rotated.outer_height), (860, 406));
    }

    #[test]
    fn test_tablet_layout() {
        let catalog = DeviceCatalog::builtin();
        let tablet = catalog.find_by_id("ipad-air").unwrap();
        let layout = FrameLayout::compute(tablet, Orientation::Portrait);
        assert_eq!(layout.content_box(), (820, 1180));
        assert_eq!((layout.outer_width, layout.outer_height), (840, 1200));
        assert_eq!(layout.chrome, ChromeStyle::TabletBezel);
    }
}
