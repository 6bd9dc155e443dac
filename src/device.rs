//! Core data structures for simulated devices.

use std::fmt;

/// Screen orientation of a simulated device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Height is the longer edge (phone/tablet default)
    #[default]
    Portrait,
    /// Width is the longer edge
    Landscape,
}

impl Orientation {
    /// The lowercase identifier used in URLs and window names.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// The opposite orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }

    /// Parse an orientation from untrusted input (e.g. a query parameter).
    ///
    /// Returns `None` for anything other than `"portrait"` or `"landscape"`;
    /// callers are expected to fall back to a device default.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device class, determining chrome style and whether rotation is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// All classes in display order (mobile, tablet, desktop).
    pub const ALL: [DeviceClass; 3] = [
        DeviceClass::Mobile,
        DeviceClass::Tablet,
        DeviceClass::Desktop,
    ];

    /// The lowercase identifier used in URLs and config files.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }

    /// Parse a device class from untrusted input.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "mobile" => Some(DeviceClass::Mobile),
            "tablet" => Some(DeviceClass::Tablet),
            "desktop" => Some(DeviceClass::Desktop),
            _ => None,
        }
    }

    /// Whether devices of this class respond to orientation toggling.
    ///
    /// Desktop profiles are stored landscape-oriented and never rotate.
    #[inline]
    pub fn rotatable(self) -> bool {
        self != DeviceClass::Desktop
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable description of a simulated screen.
///
/// `width` and `height` are stored in the profile's canonical orientation:
/// portrait for mobile and tablet, landscape for desktop. Effective display
/// dimensions are always derived (see [`crate::frame::effective_dimensions`]),
/// never written back to the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceProfile {
    /// Unique catalog key (e.g. "iphone-14-pro")
    pub id: String,
    /// Display label (e.g. "iPhone 14 Pro")
    pub name: String,
    /// Width in pixels, canonical orientation
    pub width: u32,
    /// Height in pixels, canonical orientation
    pub height: u32,
    /// Device class
    pub class: DeviceClass,
    /// Orientation the profile is presented in when first selected
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_orientation: Orientation,
}

impl DeviceProfile {
    /// Create a new profile.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        width: u32,
        height: u32,
        class: DeviceClass,
        default_orientation: Orientation,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            class,
            default_orientation,
        }
    }

    /// Whether this profile responds to orientation toggling.
    #[inline]
    pub fn rotatable(&self) -> bool {
        self.class.rotatable()
    }

    /// Short button label: the first word of the display name.
    pub fn short_label(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
