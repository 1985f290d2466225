//! Value ranges and the color mappings built on them.

use std::collections::BTreeMap;

use rgb::{RGB, RGBA, RGBA8};

use crate::colormap::Colormap;
use crate::error::{Error, Result};
use crate::table::AttributeTable;
use crate::{ColorRange, PaletteGradient, RGBColor};

/// A closed interval `[min, max]` of attribute values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64, // Invariant: min ≤ max
}

impl ValueRange {
    /// The range spanning `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { ValueRange { min: a, max: b } }
        else { ValueRange { min: b, max: a } }
    }

    /// The smallest range containing all `values`, or `None` if there
    /// are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |r, x| match r {
            None => Some(ValueRange { min: x, max: x }),
            Some(r) => Some(ValueRange { min: r.min.min(x),
                                         max: r.max.max(x) }),
        })
    }

    pub fn min(&self) -> f64 { self.min }

    pub fn max(&self) -> f64 { self.max }

    /// True if the range is a single value.
    pub fn is_degenerate(&self) -> bool { self.min == self.max }

    /// The smallest range containing both `self` and `other`.
    pub fn union(&self, other: &ValueRange) -> ValueRange {
        ValueRange { min: self.min.min(other.min),
                     max: self.max.max(other.max) }
    }

    /// True if `other` lies within `self`.
    pub fn contains(&self, other: &ValueRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Rescale `x` linearly so that `min` ↦ 0 and `max` ↦ 1, clamping
    /// to \[0, 1\].  A degenerate range maps everything to 0.
    pub fn normalize(&self, x: f64) -> f64 {
        if self.is_degenerate() { return 0. }
        ((x - self.min) / (self.max - self.min)).clamp(0., 1.)
    }
}

/// A colormap stretched over a value range: value ↦ color.
#[derive(Clone, Debug)]
pub struct ColorMapping {
    colormap: Colormap,
    range: ValueRange,
    gradient: PaletteGradient<RGBA<f64>>,
}

impl ColorMapping {
    pub fn new(colormap: Colormap, range: ValueRange) -> Self {
        ColorMapping { colormap, range, gradient: colormap.gradient() }
    }

    /// The same range, painted with another colormap.
    pub fn with_colormap(&self, colormap: Colormap) -> Self {
        Self::new(colormap, self.range)
    }

    pub fn colormap(&self) -> Colormap { self.colormap }

    pub fn range(&self) -> ValueRange { self.range }

    /// The colormap as a function of the normalized value.
    pub fn gradient(&self) -> &PaletteGradient<RGBA<f64>> { &self.gradient }

    /// Color of `x`, components in \[0, 255\].
    pub fn rgba(&self, x: f64) -> RGBA<f64> {
        self.gradient.rgb(self.range.normalize(x))
    }

    /// Color of `x` as 8-bit components.
    pub fn rgba8(&self, x: f64) -> RGBA8 { RGBA8::from_rgba(self.rgba(x)) }

    /// Color of `x` without alpha, components in \[0, 1\], as the host
    /// tool expects for color definitions.
    pub fn unit_rgb(&self, x: f64) -> RGB<f64> {
        let c = self.rgba(x);
        let unit = |v: f64| (v / 255.).clamp(0., 1.);
        RGB { r: unit(c.r), g: unit(c.g), b: unit(c.b) }
    }
}

/// The color mappings of a table: one per chain over the chain's own
/// range, plus a global one over the union of all ranges.
#[derive(Clone, Debug)]
pub struct Scales {
    global: ColorMapping,
    chains: BTreeMap<String, ColorMapping>,
}

impl Scales {
    /// Compute the ranges of `table` and stretch `colormap` over them.
    ///
    /// Fails with [`Error::NoData`] if the table is empty.
    pub fn build(table: &AttributeTable, colormap: Colormap) -> Result<Self> {
        let mut chains = BTreeMap::new();
        let mut global: Option<ValueRange> = None;
        for (id, chain) in table.chains() {
            // Chains are never empty: they are created by an insertion.
            let Some(r) = ValueRange::of(chain.values().copied())
            else { continue };
            global = Some(match global { None => r,
                                         Some(g) => g.union(&r) });
            let _ = chains.insert(id.to_string(),
                                  ColorMapping::new(colormap, r));
        }
        let global = global.ok_or(Error::NoData)?;
        Ok(Scales { global: ColorMapping::new(colormap, global), chains })
    }

    /// The mapping over the range of all chains.
    pub fn global(&self) -> &ColorMapping { &self.global }

    /// The mapping over the range of `chain` alone.
    pub fn chain(&self, chain: &str) -> Result<&ColorMapping> {
        self.chains.get(chain)
            .ok_or_else(|| Error::UnknownChain(chain.to_string()))
    }

    pub fn chains(&self) -> impl Iterator<Item = (&str, &ColorMapping)> {
        self.chains.iter().map(|(id, m)| (id.as_str(), m))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn table(s: &str) -> AttributeTable {
        AttributeTable::read(s.as_bytes()).unwrap().0
    }

    #[test]
    fn ranges_per_chain_and_global() {
        let s = Scales::build(&table("A,10,1.0\nA,11,5.0\nB,1,3.0"),
                              Colormap::Viridis).unwrap();
        assert_eq!(s.chain("A").unwrap().range(), ValueRange::new(1., 5.));
        assert_eq!(s.chain("B").unwrap().range(), ValueRange::new(3., 3.));
        assert_eq!(s.global().range(), ValueRange::new(1., 5.));
    }

    #[test]
    fn global_contains_every_chain() {
        let s = Scales::build(&table("A,1,-2\nA,2,0.5\nB,1,7\nB,9,3\n\
                                      C,4,1\nC,5,1.25"),
                              Colormap::Magma).unwrap();
        assert_eq!(s.global().range(), ValueRange::new(-2., 7.));
        for (id, m) in s.chains() {
            assert!(s.global().range().contains(&m.range()), "chain {id}");
        }
    }

    #[test]
    fn local_endpoints() {
        let s = Scales::build(&table("A,10,1.0\nA,11,5.0\nA,12,2.0"),
                              Colormap::Viridis).unwrap();
        let a = s.chain("A").unwrap();
        let g = Colormap::Viridis.gradient();
        assert_eq!(a.range().normalize(1.0), 0.);
        assert_eq!(a.range().normalize(5.0), 1.);
        assert_eq!(a.rgba(1.0), g.rgb(0.));
        assert_eq!(a.rgba(5.0), g.rgb(1.));
    }

    #[test]
    fn degenerate_range_is_constant() {
        let r = ValueRange::new(3., 3.);
        assert!(r.is_degenerate());
        assert_eq!(r.normalize(3.), 0.);
        assert_eq!(r.normalize(-10.), 0.);
        let m = ColorMapping::new(Colormap::Viridis, r);
        assert_eq!(m.rgba8(3.), m.rgba8(3.));
        assert_eq!(m.rgba(3.), Colormap::Viridis.gradient().rgb(0.));
    }

    #[test]
    fn out_of_range_values_clamp() {
        let r = ValueRange::new(0., 10.);
        assert_eq!(r.normalize(-1.), 0.);
        assert_eq!(r.normalize(11.), 1.);
        assert_eq!(r.normalize(2.5), 0.25);
    }

    #[test]
    fn unit_rgb_is_in_unit_cube() {
        let m = ColorMapping::new(Colormap::Spectral, ValueRange::new(0., 1.));
        for i in 0 ..= 20 {
            let c = m.unit_rgb(i as f64 / 20.);
            for v in [c.r, c.g, c.b] { assert!((0. ..= 1.).contains(&v)) }
        }
        let c = m.rgba8(0.);
        let u = m.unit_rgb(0.);
        assert!((u.r * 255. - c.r as f64).abs() <= 0.5 + 1e-9);
    }

    #[test]
    fn override_keeps_range() {
        let m = ColorMapping::new(Colormap::Viridis, ValueRange::new(2., 4.));
        let o = m.with_colormap(Colormap::Reds);
        assert_eq!(o.range(), m.range());
        assert_eq!(o.colormap(), Colormap::Reds);
        assert_eq!(o.rgba(4.), Colormap::Reds.gradient().rgb(1.));
    }

    #[test]
    fn empty_table_has_no_data() {
        let r = Scales::build(&AttributeTable::default(), Colormap::Viridis);
        assert!(matches!(r, Err(Error::NoData)));
    }

    #[test]
    fn range_of() {
        assert_eq!(ValueRange::of(std::iter::empty()), None);
        assert_eq!(ValueRange::of([2., -1., 4.]), Some(ValueRange::new(-1., 4.)));
        assert_eq!(ValueRange::new(4., -1.).min(), -1.);
    }
}
