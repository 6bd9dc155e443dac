//! Device registry and total input resolution.
//!
//! The catalog is read-only for the lifetime of the process: profiles are
//! loaded once (built-in or from config) and only ever handed out by
//! reference. Lookup misses are expected input noise, not faults, so the
//! `resolve` family of functions never fails — the simulator must render
//! *something* even for a tampered or missing device parameter.

use crate::{DeviceClass, DeviceProfile, Orientation};

/// Catalog id of the profile returned when no explicit device is requested.
pub const DEFAULT_DEVICE_ID: &str = "ipad-air";

/// An ordered, immutable collection of device profiles.
///
/// Insertion order is display order: mobile entries first, then tablet,
/// then desktop, matching how controls group them.
///
/// ## Example
///
/// ```rust
/// use devicesim_core::DeviceCatalog;
///
/// let catalog = DeviceCatalog::builtin();
///
/// // Lookup by id; misses are a normal outcome
/// assert!(catalog.find_by_id("iphone-14-pro").is_some());
/// assert!(catalog.find_by_id("commodore-64").is_none());
///
/// // Total resolution never fails
/// let profile = catalog.resolve(Some("commodore-64"));
/// assert_eq!(profile.id, "ipad-air");
/// ```
#[derive(Clone, Debug)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DeviceCatalog {
    /// The built-in reference catalog: four phones, two tablets, three
    /// desktop resolutions.
    pub fn builtin() -> Self {
        use DeviceClass::{Desktop, Mobile, Tablet};
        use Orientation::{Landscape, Portrait};

        let p = DeviceProfile::new;
        Self {
            profiles: vec![
                p("iphone-14-pro", "iPhone 14 Pro", 390, 844, Mobile, Portrait),
                p("iphone-15-pro-max", "iPhone 15 Pro Max", 430, 932, Mobile, Portrait),
                p("pixel-7", "Google Pixel 7", 412, 892, Mobile, Portrait),
                p("samsung-s23", "Samsung Galaxy S23", 360, 780, Mobile, Portrait),
                p("ipad-air", "iPad Air", 820, 1180, Tablet, Portrait),
                p("ipad-pro", "iPad Pro 12.9\"", 1024, 1366, Tablet, Portrait),
                p("laptop", "Laptop (1366x768)", 1366, 768, Desktop, Landscape),
                p("desktop", "Desktop (1920x1080)", 1920, 1080, Desktop, Landscape),
                p("ultrawide", "Ultrawide (3440x1440)", 3440, 1440, Desktop, Landscape),
            ],
        }
    }

    /// Build a catalog from a custom profile list.
    ///
    /// An empty list falls back to the built-in catalog: the catalog is
    /// never empty, which keeps `default_profile` and `resolve` total.
    pub fn from_profiles(profiles: Vec<DeviceProfile>) -> Self {
        if profiles.is_empty() {
            Self::builtin()
        } else {
            Self { profiles }
        }
    }

    /// Parse a catalog from a TOML document with `[[device]]` tables.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        #[derive(serde::Deserialize)]
        struct CatalogFile {
            #[serde(default)]
            device: Vec<DeviceProfile>,
        }
        let file: CatalogFile = toml::from_str(s)?;
        Ok(Self::from_profiles(file.device))
    }

    /// All profiles in catalog order.
    #[inline]
    pub fn all(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Number of profiles in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always `false`; kept for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Exact-match lookup by catalog id.
    pub fn find_by_id(&self, id: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Profiles of one class, catalog order preserved.
    pub fn by_class(&self, class: DeviceClass) -> impl Iterator<Item = &DeviceProfile> + '_ {
        self.profiles.iter().filter(move |p| p.class == class)
    }

    /// The designated default profile.
    ///
    /// Returns the iPad Air in the built-in data; custom catalogs without
    /// an `ipad-air` entry fall back to their first profile.
    pub fn default_profile(&self) -> &DeviceProfile {
        self.find_by_id(DEFAULT_DEVICE_ID)
            .unwrap_or(&self.profiles[0])
    }

    /// Resolve possibly-absent, possibly-invalid input to a valid profile.
    ///
    /// Total: any unknown or missing id degrades to [`Self::default_profile`].
    pub fn resolve(&self, candidate: Option<&str>) -> &DeviceProfile {
        candidate
            .and_then(|id| self.find_by_id(id))
            .unwrap_or_else(|| self.default_profile())
    }

    /// Resolve an orientation parameter against a profile.
    ///
    /// Invalid or absent input degrades to the profile's default orientation.
    pub fn resolve_orientation(
        &self,
        profile: &DeviceProfile,
        candidate: Option<&str>,
    ) -> Orientation {
        candidate
            .and_then(Orientation::from_param)
            .unwrap_or(profile.default_orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalog = DeviceCatalog::builtin();
        assert_eq!(catalog.len(), 9);

        // Mobile first, then tablet, then desktop
        let classes: Vec<DeviceClass> = catalog.all().iter().map(|p| p.class).collect();
        let first_tablet = classes.iter().position(|c| *c == DeviceClass::Tablet).unwrap();
        let first_desktop = classes.iter().position(|c| *c == DeviceClass::Desktop).unwrap();
        assert!(classes[..first_tablet].iter().all(|c| *c == DeviceClass::Mobile));
        assert!(first_tablet < first_desktop);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = DeviceCatalog::builtin();
        let profile = catalog.find_by_id("pixel-7").unwrap();
        assert_eq!(profile.name, "Google Pixel 7");
        assert_eq!((profile.width, profile.height), (412, 892));
        assert!(catalog.find_by_id("").is_none());
        assert!(catalog.find_by_id("IPAD-AIR").is_none()); // exact match only
    }

    #[test]
    fn test_by_class() {
        let catalog = DeviceCatalog::builtin();
        assert_eq!(catalog.by_class(DeviceClass::Mobile).count(), 4);
        assert_eq!(catalog.by_class(DeviceClass::Tablet).count(), 2);
        assert_eq!(catalog.by_class(DeviceClass::Desktop).count(), 3);

        let tablet_ids: Vec<&str> = catalog
            .by_class(DeviceClass::Tablet)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(tablet_ids, ["ipad-air", "ipad-pro"]);
    }

    #[test]
    fn test_default_profile() {
        let catalog = DeviceCatalog::builtin();
        let profile = catalog.default_profile();
        assert_eq!(profile.id, "ipad-air");
        assert_eq!((profile.width, profile.height), (820, 1180));
        assert_eq!(profile.class, DeviceClass::Tablet);
    }

    #[test]
    fn test_resolve_is_total() {
        let catalog = DeviceCatalog::builtin();
        assert_eq!(catalog.resolve(None).id, "ipad-air");
        assert_eq!(catalog.resolve(Some("")).id, "ipad-air");
        assert_eq!(catalog.resolve(Some("no-such-device")).id, "ipad-air");
        assert_eq!(catalog.resolve(Some("desktop")).id, "desktop");
    }

    #[test]
    fn test_resolve_orientation() {
        let catalog = DeviceCatalog::builtin();
        let phone = catalog.find_by_id("iphone-14-pro").unwrap();
        let desk = catalog.find_by_id("desktop").unwrap();

        assert_eq!(
            catalog.resolve_orientation(phone, Some("landscape")),
            Orientation::Landscape
        );
        assert_eq!(
            catalog.resolve_orientation(phone, Some("diagonal")),
            Orientation::Portrait
        );
        assert_eq!(catalog.resolve_orientation(phone, None), Orientation::Portrait);
        assert_eq!(catalog.resolve_orientation(desk, None), Orientation::Landscape);
    }

    #[test]
    fn test_from_profiles_empty_falls_back() {
        let catalog = DeviceCatalog::from_profiles(Vec::new());
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_custom_catalog_default() {
        let custom = DeviceCatalog::from_profiles(vec![DeviceProfile::new(
            "kiosk",
            "Kiosk Panel",
            1080,
            1920,
            DeviceClass::Tablet,
            Orientation::Portrait,
        )]);
        // No ipad-air entry: first profile is the default
        assert_eq!(custom.default_profile().id, "kiosk");
        assert_eq!(custom.resolve(Some("unknown")).id, "kiosk");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml() {
        let catalog = DeviceCatalog::from_toml_str(
            r#"
            [[device]]
            id = "surface-pro"
            name = "Surface Pro 9"
            width = 912
            height = 1368
            class = "tablet"

            [[device]]
            id = "fhd"
            name = "Full HD"
            width = 1920
            height = 1080
            class = "desktop"
            default_orientation = "landscape"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let surface = catalog.find_by_id("surface-pro").unwrap();
        assert_eq!(surface.class, DeviceClass::Tablet);
        // default_orientation omitted: portrait
        assert_eq!(surface.default_orientation, Orientation::Portrait);
    }
}
