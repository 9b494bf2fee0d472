//! Placement options for a blueprint location (`#Location` section).
//!
//! These control how the host scatters instances of the location across a
//! world. Every option is optional: an unset option means the host default.
//! Lines are `key: value` with a case-insensitive key.

use std::fmt;

use log::debug;

use crate::numeric::{format_bool, format_float, parse_bool, parse_float, parse_int};

use super::DocumentError;

/// A set of world biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Biome(u32);

impl Biome {
    pub const NONE: Biome = Biome(0);
    pub const MEADOWS: Biome = Biome(1);
    pub const SWAMP: Biome = Biome(2);
    pub const MOUNTAIN: Biome = Biome(4);
    pub const BLACK_FOREST: Biome = Biome(8);
    pub const PLAINS: Biome = Biome(16);
    pub const ASH_LANDS: Biome = Biome(32);
    pub const DEEP_NORTH: Biome = Biome(64);
    pub const OCEAN: Biome = Biome(256);
    pub const MISTLANDS: Biome = Biome(512);

    const NAMED: [(Biome, &'static str); 9] = [
        (Biome::MEADOWS, "Meadows"),
        (Biome::SWAMP, "Swamp"),
        (Biome::MOUNTAIN, "Mountain"),
        (Biome::BLACK_FOREST, "BlackForest"),
        (Biome::PLAINS, "Plains"),
        (Biome::ASH_LANDS, "AshLands"),
        (Biome::DEEP_NORTH, "DeepNorth"),
        (Biome::OCEAN, "Ocean"),
        (Biome::MISTLANDS, "Mistlands"),
    ];

    pub const fn from_bits(bits: u32) -> Biome {
        Biome(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: Biome) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Biome) -> Biome {
        Biome(self.0 | other.0)
    }

    /// Parses `Meadows`, `Meadows, Swamp`, `None` or a raw integer value.
    /// Names are matched case-insensitively.
    pub fn parse(value: &str) -> Option<Biome> {
        let trimmed = value.trim();
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Some(Biome(bits));
        }
        let mut biome = Biome::NONE;
        for part in trimmed.split(',') {
            let part = part.trim();
            if part.eq_ignore_ascii_case("None") {
                continue;
            }
            let (named, _) = Self::NAMED
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(part))?;
            biome = biome.union(*named);
        }
        Some(biome)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("None");
        }
        let named = Self::NAMED
            .iter()
            .fold(0, |bits, (biome, _)| bits | biome.0);
        if self.0 & !named != 0 {
            // bits without a name can only be written as the raw value
            return write!(f, "{}", self.0);
        }
        let mut first = true;
        for (biome, name) in Self::NAMED {
            if self.contains(biome) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A `group` option value: one line of text without surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct GroupName(String);

impl GroupName {
    /// Trims `name`. Fails when it holds a line break.
    pub fn new(name: impl Into<String>) -> Result<Self, DocumentError> {
        let name = name.into();
        if name.contains(|c| c == '\n' || c == '\r') {
            return Err(DocumentError::InvalidOptionValue {
                key: "group".to_string(),
                value: name,
                expected: <GroupName as OptionValue>::EXPECTED,
            });
        }
        Ok(Self(name.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value type a location option can hold.
trait OptionValue: Sized {
    const EXPECTED: &'static str;

    fn parse_value(value: &str) -> Option<Self>;

    fn render_value(&self) -> String;
}

impl OptionValue for bool {
    const EXPECTED: &'static str = "true or false";

    fn parse_value(value: &str) -> Option<Self> {
        parse_bool(value)
    }

    fn render_value(&self) -> String {
        format_bool(*self).to_string()
    }
}

impl OptionValue for i32 {
    const EXPECTED: &'static str = "an integer";

    fn parse_value(value: &str) -> Option<Self> {
        parse_int(value)
    }

    fn render_value(&self) -> String {
        self.to_string()
    }
}

impl OptionValue for f32 {
    const EXPECTED: &'static str = "a number";

    fn parse_value(value: &str) -> Option<Self> {
        parse_float(value)
    }

    fn render_value(&self) -> String {
        format_float(*self)
    }
}

impl OptionValue for GroupName {
    const EXPECTED: &'static str = "text on one line";

    fn parse_value(value: &str) -> Option<Self> {
        GroupName::new(value).ok()
    }

    fn render_value(&self) -> String {
        self.0.clone()
    }
}

impl OptionValue for Biome {
    const EXPECTED: &'static str = "a biome name";

    fn parse_value(value: &str) -> Option<Self> {
        Biome::parse(value)
    }

    fn render_value(&self) -> String {
        self.to_string()
    }
}

macro_rules! location_options {
    ($($(#[$doc:meta])* $field:ident: $ty:ty => $key:literal, $label:literal;)*) => {
        /// Placement options of a blueprint location. `None` means host default.
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct LocationConfig {
            $($(#[$doc])* pub $field: Option<$ty>,)*
        }

        impl LocationConfig {
            /// Lowercase keys in canonical output order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// Set the option named `key` (already lowercased). Returns
            /// `Ok(false)` when no option has that name.
            fn set_option(&mut self, key: &str, value: &str) -> Result<bool, DocumentError> {
                match key {
                    $($key => {
                        let parsed = <$ty as OptionValue>::parse_value(value).ok_or_else(|| {
                            DocumentError::InvalidOptionValue {
                                key: key.to_string(),
                                value: value.to_string(),
                                expected: <$ty as OptionValue>::EXPECTED,
                            }
                        })?;
                        self.$field = Some(parsed);
                        Ok(true)
                    })*
                    _ => Ok(false),
                }
            }

            /// `Label: value` lines for every option that is set.
            pub fn to_lines(&self) -> Vec<String> {
                let mut lines = Vec::new();
                $(if let Some(value) = &self.$field {
                    lines.push(format!("{}: {}", $label, value.render_value()));
                })*
                lines
            }

            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

location_options! {
    biome: Biome => "biome", "Biome";
    /// Place this location before the non-prioritized ones
    prioritized: bool => "prioritized", "Prioritized";
    quantity: i32 => "quantity", "Quantity";
    exterior_radius: f32 => "exteriorradius", "ExteriorRadius";
    center_first: bool => "centerfirst", "CenterFirst";
    in_forest: bool => "inforest", "InForest";
    forest_threshold_min: f32 => "forestthresholdmin", "ForestThresholdMin";
    forest_threshold_max: f32 => "forestthresholdmax", "ForestThresholdMax";
    unique: bool => "unique", "Unique";
    min_altitude: f32 => "minaltitude", "MinAltitude";
    max_altitude: f32 => "maxaltitude", "MaxAltitude";
    max_distance: f32 => "maxdistance", "MaxDistance";
    min_distance: f32 => "mindistance", "MinDistance";
    /// Locations sharing a group keep `min_distance_from_similar` apart
    group: GroupName => "group", "Group";
    min_distance_from_similar: f32 => "mindistancefromsimilar", "MinDistanceFromSimilar";
    min_terrain_delta: f32 => "minterraindelta", "MinTerrainDelta";
    max_terrain_delta: f32 => "maxterraindelta", "MaxTerrainDelta";
    slope_rotation: bool => "sloperotation", "SlopeRotation";
    random_rotation: bool => "randomrotation", "RandomRotation";
    snap_to_water: bool => "snaptowater", "SnapToWater";
    clear_area: bool => "cleararea", "ClearArea";
}

impl LocationConfig {
    /// Apply one `key: value` line from a `#Location` section. Unknown keys
    /// are logged and ignored.
    pub fn apply_line(&mut self, line: &str) -> Result<(), DocumentError> {
        let Some((key, value)) = line.split_once(':') else {
            return Err(DocumentError::MissingOptionValue {
                line: line.to_string(),
            });
        };
        let key = key.trim().to_ascii_lowercase();
        if !self.set_option(&key, value.trim())? {
            debug!("Invalid location config {}", key);
        }
        Ok(())
    }
}
