//! Vehicle identity resolution
//!
//! Maps a BSP file's basename to the vehicle it belongs to. The game ships
//! exactly 36 of these files (18 karts and 18 bikes, each in S/M/L weight
//! classes with letter-coded variants), so the mapping is a closed table
//! keyed by exact basename; anything else resolves to an unknown identity
//! that keeps the basename for display.

/// Closed table of known BSP basenames and their vehicle names, in the
/// game's internal vehicle order.
const VEHICLES: [(&str, &str); 36] = [
    ("sdf_kart.bsp", "Standard Kart S"),
    ("mdf_kart.bsp", "Standard Kart M"),
    ("ldf_kart.bsp", "Standard Kart L"),
    ("sa_kart.bsp", "Booster Seat"),
    ("ma_kart.bsp", "Classic Dragster"),
    ("la_kart.bsp", "Offroader"),
    ("sb_kart.bsp", "Mini Beast"),
    ("mb_kart.bsp", "Wild Wing"),
    ("lb_kart.bsp", "Flame Flyer"),
    ("sc_kart.bsp", "Cheep Charger"),
    ("mc_kart.bsp", "Super Blooper"),
    ("lc_kart.bsp", "Piranha Prowler"),
    ("sd_kart.bsp", "Tiny Titan"),
    ("md_kart.bsp", "Daytripper"),
    ("ld_kart.bsp", "Jetsetter"),
    ("se_kart.bsp", "Blue Falcon"),
    ("me_kart.bsp", "Sprinter"),
    ("le_kart.bsp", "Honeycoupe"),
    ("sdf_bike.bsp", "Standard Bike S"),
    ("mdf_bike.bsp", "Standard Bike M"),
    ("ldf_bike.bsp", "Standard Bike L"),
    ("sa_bike.bsp", "Bullet Bike"),
    ("ma_bike.bsp", "Mach Bike"),
    ("la_bike.bsp", "Flame Runner"),
    ("sb_bike.bsp", "Bit Bike"),
    ("mb_bike.bsp", "Sugarscoot"),
    ("lb_bike.bsp", "Wario Bike"),
    ("sc_bike.bsp", "Quacker"),
    ("mc_bike.bsp", "Zip Zip"),
    ("lc_bike.bsp", "Shooting Star"),
    ("sd_bike.bsp", "Magikruiser"),
    ("md_bike.bsp", "Sneakster"),
    ("ld_bike.bsp", "Spear"),
    ("se_bike.bsp", "Jet Bubble"),
    ("me_bike.bsp", "Dolphin Dasher"),
    ("le_bike.bsp", "Phantom"),
];

/// Sentinel display name for basenames outside the table.
const UNKNOWN_VEHICLE: &str = "Unknown vehicle";

/// The resolved identity of one BSP file.
///
/// Every path resolves to something; a basename outside the known table
/// yields an identity whose display name is the unknown sentinel and whose
/// basename is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleIdentity {
    basename: String,
    vehicle: Option<&'static str>,
}

impl VehicleIdentity {
    /// Resolve a path to a vehicle identity.
    ///
    /// The basename is the substring after the last `/`, or the whole
    /// string when the path has no separator; the lookup is exact string
    /// equality against the closed table.
    pub fn resolve(path: &str) -> Self {
        let basename = path.rsplit('/').next().unwrap_or(path);
        let vehicle =
            VEHICLES.iter().find(|(file, _)| *file == basename).map(|(_, name)| *name);
        Self { basename: basename.to_string(), vehicle }
    }

    /// The file basename the lookup used.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The vehicle's display name, or the unknown sentinel.
    pub fn display_name(&self) -> &str {
        self.vehicle.unwrap_or(UNKNOWN_VEHICLE)
    }

    /// Whether the basename matched the known table.
    pub fn is_known(&self) -> bool {
        self.vehicle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_basename_resolves_through_a_path() {
        let identity = VehicleIdentity::resolve("any/path/mb_kart.bsp");
        assert_eq!(identity.display_name(), "Wild Wing");
        assert_eq!(identity.basename(), "mb_kart.bsp");
        assert!(identity.is_known());
    }

    #[test]
    fn bare_basename_resolves_without_a_separator() {
        let identity = VehicleIdentity::resolve("se_kart.bsp");
        assert_eq!(identity.display_name(), "Blue Falcon");
        assert_eq!(identity.basename(), "se_kart.bsp");
    }

    #[test]
    fn unknown_basename_keeps_its_name() {
        let identity = VehicleIdentity::resolve("x.bsp");
        assert_eq!(identity.display_name(), "Unknown vehicle");
        assert_eq!(identity.basename(), "x.bsp");
        assert!(!identity.is_known());
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        // A directory component matching a table entry must not win.
        let identity = VehicleIdentity::resolve("mb_kart.bsp/extra");
        assert_eq!(identity.display_name(), "Unknown vehicle");
        assert_eq!(identity.basename(), "extra");

        assert!(!VehicleIdentity::resolve("mb_kart.bsp.bak").is_known());
        assert!(!VehicleIdentity::resolve("MB_KART.BSP").is_known());
    }

    #[test]
    fn table_covers_all_36_vehicles_uniquely() {
        assert_eq!(VEHICLES.len(), 36);
        for (file, name) in VEHICLES {
            let identity = VehicleIdentity::resolve(file);
            assert_eq!(identity.display_name(), name);
            // Basenames and display names are unique across the table.
            assert_eq!(VEHICLES.iter().filter(|(f, _)| *f == file).count(), 1);
            assert_eq!(VEHICLES.iter().filter(|(_, n)| *n == name).count(), 1);
        }
        assert_eq!(VEHICLES.iter().filter(|(f, _)| f.ends_with("_kart.bsp")).count(), 18);
        assert_eq!(VEHICLES.iter().filter(|(f, _)| f.ends_with("_bike.bsp")).count(), 18);
    }
}
