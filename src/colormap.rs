//! Registry of the colormaps a scale can use.
//!
//! Names are resolved once, when a [`ColorMapping`](crate::ColorMapping)
//! is built, so an unknown name fails before anything is painted.

use std::fmt;
use std::str::FromStr;

use rgb::RGBA;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{Palette, PaletteGradient, PaletteType, RGBColor};

/// A supported colormap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Colormap {
    #[default]
    Viridis,
    Magma,
    Inferno,
    Plasma,
    Cividis,
    Blues,
    Greens,
    Greys,
    Reds,
    YlOrRd,
    RdBu,
    Spectral,
}

impl Colormap {
    /// Every registered colormap, in listing order.
    pub const ALL: [Colormap; 12] = [
        Colormap::Viridis, Colormap::Magma, Colormap::Inferno,
        Colormap::Plasma, Colormap::Cividis,
        Colormap::Blues, Colormap::Greens, Colormap::Greys, Colormap::Reds,
        Colormap::YlOrRd, Colormap::RdBu, Colormap::Spectral];

    /// The canonical name, as spelled by Matplotlib.
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
            Colormap::Cividis => "cividis",
            Colormap::Blues => "Blues",
            Colormap::Greens => "Greens",
            Colormap::Greys => "Greys",
            Colormap::Reds => "Reds",
            Colormap::YlOrRd => "YlOrRd",
            Colormap::RdBu => "RdBu",
            Colormap::Spectral => "Spectral",
        }
    }

    /// The names of all registered colormaps.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }

    /// The stops of the colormap.
    pub fn palette(self) -> Palette<RGBA<f64>> {
        type C = RGBA<f64>;
        match self {
            Colormap::Viridis => C::viridis(),
            Colormap::Magma => C::magma(),
            Colormap::Inferno => C::inferno(),
            Colormap::Plasma => C::plasma(),
            Colormap::Cividis => C::cividis(),
            Colormap::Blues => C::blues(),
            Colormap::Greens => C::greens(),
            Colormap::Greys => C::greys(),
            Colormap::Reds => C::reds(),
            Colormap::YlOrRd => C::ylorrd(),
            Colormap::RdBu => C::rdbu(),
            Colormap::Spectral => C::spectral(),
        }
    }

    /// Whether the colormap is sequential or diverging.
    pub fn typ(self) -> PaletteType { self.palette().typ() }

    /// The continuous function \[0, 1\] → RGBA of the colormap.
    pub fn gradient(self) -> PaletteGradient<RGBA<f64>> {
        self.palette().gradient()
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = Error;

    /// Case-insensitive lookup: `"viridis"`, `"RdBu"` and `"rdbu"`
    /// all resolve.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        Self::ALL.iter().copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownColormap(s.to_string()))
    }
}

impl TryFrom<String> for Colormap {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> { s.parse() }
}

impl From<Colormap> for String {
    fn from(c: Colormap) -> String { c.name().to_string() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorRange;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!("viridis".parse::<Colormap>().unwrap(), Colormap::Viridis);
        assert_eq!("VIRIDIS".parse::<Colormap>().unwrap(), Colormap::Viridis);
        assert_eq!(" rdbu ".parse::<Colormap>().unwrap(), Colormap::RdBu);
        for c in Colormap::ALL {
            assert_eq!(c.name().parse::<Colormap>().unwrap(), c);
        }
    }

    #[test]
    fn unknown_name_lists_supported() {
        match "jet".parse::<Colormap>() {
            Err(e @ Error::UnknownColormap(_)) => {
                let msg = e.to_string();
                assert!(msg.contains("'jet'"), "{msg}");
                assert!(msg.contains("viridis"), "{msg}");
            }
            other => panic!("expected UnknownColormap, got {other:?}"),
        }
    }

    #[test]
    fn default_is_viridis() {
        assert_eq!(Colormap::default(), Colormap::Viridis);
        assert_eq!(Colormap::default().to_string(), "viridis");
    }

    #[test]
    fn palettes_are_well_formed() {
        for c in Colormap::ALL {
            let p = c.palette();
            assert!(p.len() >= 2, "{c}");
            let g = c.gradient();
            let lo = g.rgb(0.);
            let hi = g.rgb(1.);
            assert!(lo != hi, "{c} has identical endpoints");
        }
        assert_eq!(Colormap::RdBu.typ(), PaletteType::Div);
        assert_eq!(Colormap::Viridis.typ(), PaletteType::Seq);
    }
}
