//! The 11 shade keys and the [`ColorScale`] that maps every one of them to a
//! color.

use std::{collections::BTreeMap, fmt, ops::Index, str::FromStr};

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    color::Component,
    curve::RangeType,
    error::{Error, Result},
    models::Rgb,
};

/// One of the fixed steps of a color scale, from 50 (lightest) to 950
/// (darkest). Ordering follows the numeric key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum Shade {
    /// Shade 50, the lightest.
    S50 = 50,
    /// Shade 100.
    S100 = 100,
    /// Shade 200.
    S200 = 200,
    /// Shade 300.
    S300 = 300,
    /// Shade 400.
    S400 = 400,
    /// Shade 500, closest to the base color.
    S500 = 500,
    /// Shade 600.
    S600 = 600,
    /// Shade 700.
    S700 = 700,
    /// Shade 800.
    S800 = 800,
    /// Shade 900.
    S900 = 900,
    /// Shade 950, the darkest.
    S950 = 950,
}

impl Shade {
    /// Number of shades in a scale.
    pub const COUNT: usize = 11;

    /// Every shade, lightest first.
    pub const ALL: [Shade; Self::COUNT] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Shades edited with the light curves (50 to 500).
    pub const LIGHT: [Shade; 6] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
    ];

    /// Shades edited with the dark curves (600 to 950).
    pub const DARK: [Shade; 5] = [
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// The numeric key, e.g. `500`.
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Index of the shade in [`Shade::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Shade::S50 => 0,
            Shade::S100 => 1,
            Shade::S200 => 2,
            Shade::S300 => 3,
            Shade::S400 => 4,
            Shade::S500 => 5,
            Shade::S600 => 6,
            Shade::S700 => 7,
            Shade::S800 => 8,
            Shade::S900 => 9,
            Shade::S950 => 10,
        }
    }

    /// The shade at `index` in [`Shade::ALL`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Normalized position of the shade along the whole scale: 50 is 0.0,
    /// 950 is 1.0 and each step adds 0.1.
    pub fn position(self) -> Component {
        self.index() as Component / (Self::COUNT - 1) as Component
    }

    /// The half of the scale this shade belongs to.
    pub fn range(self) -> RangeType {
        if self <= Shade::S500 {
            RangeType::Light
        } else {
            RangeType::Dark
        }
    }

    /// Normalized position of the shade inside its own half of the scale:
    /// 50 to 500 map onto [0..1] in steps of 0.2, 600 to 950 in steps of 0.25.
    pub fn range_position(self) -> Component {
        let (index, len) = match self.range() {
            RangeType::Light => (self.index(), Self::LIGHT.len()),
            RangeType::Dark => (self.index() - Self::LIGHT.len(), Self::DARK.len()),
        };
        index as Component / (len - 1) as Component
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for Shade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|shade| s.parse::<u16>().is_ok_and(|v| v == shade.value()))
            .ok_or_else(|| Error::InvalidShade(s.to_string()))
    }
}

/// A complete scale of colors, one for each [`Shade`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
    shades: [Rgb; Shade::COUNT],
}

impl ColorScale {
    /// Build a scale by calling `f` for every shade, lightest first.
    pub fn from_fn(f: impl FnMut(Shade) -> Rgb) -> Self {
        Self {
            shades: Shade::ALL.map(f),
        }
    }

    /// Build a scale by calling `f` for every shade, lightest first. Returns
    /// `None` as soon as `f` does.
    pub fn try_from_fn(mut f: impl FnMut(Shade) -> Option<Rgb>) -> Option<Self> {
        let mut shades = [Rgb::default(); Shade::COUNT];
        for (slot, shade) in shades.iter_mut().zip(Shade::ALL) {
            *slot = f(shade)?;
        }
        Some(Self { shades })
    }

    /// The color for `shade`.
    pub fn get(&self, shade: Shade) -> Rgb {
        self.shades[shade.index()]
    }

    /// The color for `shade` as `#rrggbb`.
    pub fn hex(&self, shade: Shade) -> String {
        self.get(shade).to_hex()
    }

    /// Iterate over all shades and their colors, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgb)> + '_ {
        Shade::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// The scale as a map of shade key (`"50"`, ...) to `#rrggbb`, the form
    /// handed to export formatters.
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(shade, color)| (shade.to_string(), color.to_hex()))
            .collect()
    }
}

impl Index<Shade> for ColorScale {
    type Output = Rgb;

    fn index(&self, shade: Shade) -> &Self::Output {
        &self.shades[shade.index()]
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Shade::COUNT))?;
        for (shade, color) in self.iter() {
            map.serialize_entry(&shade.to_string(), &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn all_is_sorted_and_indexed() {
        for (i, shade) in Shade::ALL.into_iter().enumerate() {
            assert_eq!(shade.index(), i);
            assert_eq!(Shade::from_index(i), Some(shade));
        }
        assert!(Shade::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Shade::from_index(11), None);
    }

    #[test_case(Shade::S50, 0.0)]
    #[test_case(Shade::S100, 0.1)]
    #[test_case(Shade::S300, 0.3)]
    #[test_case(Shade::S500, 0.5)]
    #[test_case(Shade::S950, 1.0)]
    fn positions(shade: Shade, expected: Component) {
        assert_eq!(shade.position(), expected);
    }

    #[test_case(Shade::S50, RangeType::Light, 0.0)]
    #[test_case(Shade::S200, RangeType::Light, 0.4)]
    #[test_case(Shade::S500, RangeType::Light, 1.0)]
    #[test_case(Shade::S600, RangeType::Dark, 0.0)]
    #[test_case(Shade::S800, RangeType::Dark, 0.5)]
    #[test_case(Shade::S950, RangeType::Dark, 1.0)]
    fn range_positions(shade: Shade, range: RangeType, expected: Component) {
        assert_eq!(shade.range(), range);
        assert_component_eq!(shade.range_position(), expected);
    }

    #[test]
    fn parse_and_display() {
        for shade in Shade::ALL {
            assert_eq!(shade.to_string().parse::<Shade>().unwrap(), shade);
        }
        assert_eq!("950".parse::<Shade>().unwrap(), Shade::S950);
        assert!(matches!("150".parse::<Shade>(), Err(Error::InvalidShade(s)) if s == "150"));
        assert!("".parse::<Shade>().is_err());
    }

    #[test]
    fn scale_lookup() {
        let scale = ColorScale::from_fn(|shade| {
            let v = (shade.index() * 20) as u8;
            Rgb::new(v, v, v)
        });
        assert_eq!(scale[Shade::S50], Rgb::new(0, 0, 0));
        assert_eq!(scale.get(Shade::S950), Rgb::new(200, 200, 200));
        assert_eq!(scale.hex(Shade::S100), "#141414");
        assert_eq!(scale.iter().count(), Shade::COUNT);
    }

    #[test]
    fn try_from_fn_stops_on_none() {
        let scale = ColorScale::try_from_fn(|shade| (shade != Shade::S700).then_some(Rgb::default()));
        assert!(scale.is_none());

        let scale = ColorScale::try_from_fn(|_| Some(Rgb::new(1, 2, 3)));
        assert_eq!(scale.unwrap()[Shade::S700], Rgb::new(1, 2, 3));
    }

    #[test]
    fn hex_map_has_every_key() {
        let map = ColorScale::from_fn(|_| Rgb::new(0x3b, 0x82, 0xf6)).to_hex_map();
        let mut keys: Vec<_> = map.keys().map(|k| k.parse::<u16>().unwrap()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]
        );
        assert!(map.values().all(|v| v == "#3b82f6"));
    }

    #[test]
    fn serializes_as_a_map() {
        #[derive(Serialize)]
        struct Doc {
            scale: ColorScale,
        }

        let doc = Doc {
            scale: ColorScale::from_fn(|_| Rgb::new(0, 0, 0)),
        };
        let text = toml::to_string(&doc).unwrap();
        assert!(text.contains(r##"50 = "#000000""##));
        assert!(text.contains(r##"950 = "#000000""##));
    }
}
