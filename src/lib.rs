//! Paint per-residue attributes on molecular structures.
//!
//! An [`AttributePainter`] reads a CSV of `chain,residue,value`
//! triples into an [`AttributeTable`], derives a [`ValueRange`] per
//! chain plus a global one, and maps values to colors through a
//! [`Colormap`].  The colors are pushed to a host visualization tool
//! through the [`StructureRenderer`] trait, and a [`Legend`] image of
//! the global scale can be saved alongside.
//!
//! The color machinery is generic:
//!
//! - [`ColorRange`]: anything mapping \[0, 1\] to colors;
//! - [`Gradient`]: between two colors, in the CIE L*C*h space;
//! - [`Palette`] and [`PaletteGradient`]: Matplotlib
//!   [`viridis`](RGBColor::viridis), [`magma`](RGBColor::magma), …
//!   and a selection of [schemes by Cynthia
//!   Brewer](https://colorbrewer2.org/).

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};

mod palettes;
use palettes::ty::PaletteData;
pub use palettes::ty::PaletteType;

mod font;
pub mod colormap;
pub mod commands;
pub mod config;
pub mod error;
pub mod legend;
pub mod painter;
pub mod renderer;
pub mod scale;
pub mod table;

pub use colormap::Colormap;
pub use config::Config;
pub use error::{Error, Result};
pub use legend::{Legend, LegendFormat, LegendStyle, Orientation};
pub use painter::{AttributePainter, Norm, PaintOptions};
pub use renderer::{PmlWriter, Recorder, Selection, StructureRenderer};
pub use scale::{ColorMapping, Scales, ValueRange};
pub use table::{AttributeTable, RejectReason, RejectedLine};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// Sampling a borrowed range leaves it usable afterwards.
impl<R, Color> ColorRange<Color> for &R
where R: ColorRange<Color> + ?Sized {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i > self.j { 0 } else { self.j - self.i + 1 }
    }
}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    /// Integer encodings round to the nearest value and saturate.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use attribute_painter::{RGBColor, ColorRange};
    /// let red = RGB8::new(255,0, 0);
    /// let blue = RGB8::new(0, 0, 255);
    /// let grad = red.gradient(&blue);
    /// let rgb = grad.rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Matplotlib magma color scheme.
    ///
    /// ![magma](https://matplotlib.org/stable/_images/sphx_glr_colormap_reference_001_2_0x.png)
    #[inline]
    fn magma() -> Palette<Self> { Palette::new(&palettes::MAGMA) }

    /// Matplotlib inferno color scheme.
    #[inline]
    fn inferno() -> Palette<Self> { Palette::new(&palettes::INFERNO) }

    /// Matplotlib plasma color scheme.
    #[inline]
    fn plasma() -> Palette<Self> { Palette::new(&palettes::PLASMA) }

    /// Matplotlib viridis color scheme.
    #[inline]
    fn viridis() -> Palette<Self> { Palette::new(&palettes::VIRIDIS) }

    /// Matplotlib cividis color scheme, designed for readers with
    /// color vision deficiency.
    #[inline]
    fn cividis() -> Palette<Self> { Palette::new(&palettes::CIVIDIS) }

    /// Brewer "Light to dark blue" sequential scheme.
    #[inline]
    fn blues() -> Palette<Self> { Palette::new(&palettes::BLUES) }

    /// Brewer "Light to dark green" sequential scheme.
    #[inline]
    fn greens() -> Palette<Self> { Palette::new(&palettes::GREENS) }

    /// Brewer "Light to dark gray" sequential scheme.
    #[inline]
    fn greys() -> Palette<Self> { Palette::new(&palettes::GREYS) }

    /// Brewer "Light to dark red" sequential scheme.
    #[inline]
    fn reds() -> Palette<Self> { Palette::new(&palettes::REDS) }

    /// Brewer "Light yellow to orange to dark red" sequential scheme.
    #[inline]
    fn ylorrd() -> Palette<Self> { Palette::new(&palettes::YLORRD) }

    /// Brewer "Dark red to light to dark blue" diverging scheme.
    #[inline]
    fn rdbu() -> Palette<Self> { Palette::new(&palettes::RDBU) }

    /// Brewer "Dark red, orange, light yellow, green, dark blue"
    /// diverging scheme.
    #[inline]
    fn spectral() -> Palette<Self> { Palette::new(&palettes::SPECTRAL) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r, g, b, a: self.a }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Debug)]
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - fist color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unsafe(&self, t: f64) -> Color {
        let lhc = Lch { l: self.c0.l + t * self.dc.l,
              c: self.c0.c + t * self.dc.c,
              h: self.c0.h + t * self.dc.h,
              a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lhc.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn rgb(&self, t: f64) -> Color { self.rgb_unsafe(t.clamp(0., 1.)) }
}


/// # Color palettes (aka colormaps)
///
/// A fixed list of colors, obtained from the named constructors of
/// [`RGBColor`] or from [`Colormap::palette`].
#[derive(Clone, Copy, Debug)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient going through all the colors of the
    /// palette, evenly spaced.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }
}

/// A gradient based on a [`Palette`].
#[derive(Clone, Debug)]
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>, // Invariant: non-empty
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unsafe(tn.fract()) }
        else { self.gradients[n-1].rgb_unsafe(1.) }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // The L*C*h round trip is accurate to about 1e-5.
    fn close(c0: RGBA<f64>, c1: RGBA<f64>) -> bool {
        (c0.r - c1.r).abs() < 1e-3 && (c0.g - c1.g).abs() < 1e-3
            && (c0.b - c1.b).abs() < 1e-3 && (c0.a - c1.a).abs() < 1e-3
    }

    #[test]
    fn gradient_endpoints() {
        let c0 = RGBA { r: 94., g: 0., b: 99., a: 255. };
        let c1 = RGBA { r: 255., g: 235., b: 170., a: 255. };
        let g = c0.gradient(&c1);
        assert!(close(g.rgb(0.), c0), "{:?}", g.rgb(0.));
        assert!(close(g.rgb(1.), c1), "{:?}", g.rgb(1.));
        // Out of range parameters are clamped.
        assert!(close(g.rgb(-3.), c0));
        assert!(close(g.rgb(7.), c1));
    }

    #[test]
    fn palette_gradient_hits_stops() {
        let p = RGBA::<f64>::viridis();
        let colors = p.colors();
        let g = p.gradient();
        let n = (p.len() - 1) as f64;
        for (i, &c) in colors.iter().enumerate() {
            assert!(close(g.rgb(i as f64 / n), c), "stop {i}");
        }
    }

    #[test]
    fn integer_colors_round() {
        let c = RGB8::from_rgba(RGBA { r: 67.9999, g: 0.4, b: 300., a: 255. });
        assert_eq!(c, RGB8::new(68, 0, 255));
    }

    #[test]
    fn range_samples_bounds() {
        let g = RGB8::viridis().gradient();
        let xs: Vec<f64> = (&g).range(1., 5., 5).map(|(x, _)| x).collect();
        assert_eq!(xs, vec![1., 2., 3., 4., 5.]);
        let (x, c) = (&g).range(1., 5., 5).next_back().unwrap();
        assert_eq!(x, 5.);
        assert_eq!(c, g.rgb(1.));
        assert_eq!((&g).range(0., 1., 0).count(), 0);
        assert_eq!((&g).range(0., 1., 7).len(), 7);
    }
}
