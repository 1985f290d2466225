//! Colorbar images for a [`ColorMapping`].

use std::path::Path;

use image::{ImageError, ImageFormat, Rgb, RgbImage};
use log::info;
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::font::{self, GLYPH_H};
use crate::scale::{ColorMapping, ValueRange};
use crate::{ColorRange, RGBColor};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Direction of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Low values on the left, labels below.
    Horizontal,
    /// Low values at the bottom, labels on the right.
    Vertical,
}

/// Image formats a legend can be saved in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl LegendFormat {
    /// Recognized file extensions (compared case-insensitively).
    pub const EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(LegendFormat::Png),
            "jpg" | "jpeg" => Some(LegendFormat::Jpeg),
            "bmp" => Some(LegendFormat::Bmp),
            "tif" | "tiff" => Some(LegendFormat::Tiff),
            _ => None,
        }
    }

    /// The format named by the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat { path: path.to_path_buf() })
    }

    fn image_format(self) -> ImageFormat {
        match self {
            LegendFormat::Png => ImageFormat::Png,
            LegendFormat::Jpeg => ImageFormat::Jpeg,
            LegendFormat::Bmp => ImageFormat::Bmp,
            LegendFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Dimensions of a legend, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendStyle {
    /// Length of the bar along its gradient.
    pub length: u32,
    /// Width of the bar across its gradient.
    pub thickness: u32,
    /// Blank border around the drawing.
    pub margin: u32,
    /// Upper bound on the number of labelled ticks.
    pub max_ticks: usize,
    /// Magnification of the 5×7 label font.
    pub font_scale: u32,
}

impl Default for LegendStyle {
    fn default() -> Self {
        LegendStyle { length: 512, thickness: 40, margin: 16, max_ticks: 6,
                      font_scale: 2 }
    }
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let f = raw / mag;
    let nice = if f <= 1. { 1. } else if f <= 2. { 2. }
               else if f <= 2.5 { 2.5 } else if f <= 5. { 5. } else { 10. };
    nice * mag
}

/// At most `max_ticks` evenly spaced round values within `range`,
/// with the step between them.  A degenerate range has one tick.
pub fn ticks(range: ValueRange, max_ticks: usize) -> (Vec<f64>, f64) {
    let (lo, hi) = (range.min(), range.max());
    if max_ticks == 0 { return (vec![], 0.) }
    if range.is_degenerate() || max_ticks == 1 { return (vec![lo], 0.) }
    let step = nice_step((hi - lo) / (max_ticks - 1) as f64);
    // Absorb rounding so that e.g. 1 / 0.2 still reaches 5.
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    let ticks = (first ..= last).map(|k| k as f64 * step).collect();
    (ticks, step)
}

/// Number of decimals needed to write multiples of `step` exactly.
fn decimals(step: f64) -> usize {
    (0 .. 10).find(|&d| {
        let s = step * 10f64.powi(d as i32);
        (s - s.round()).abs() < 1e-6 * s.abs().max(1.)
    }).unwrap_or(10)
}

/// The label of the tick `x` of a scale with the given `step` (`0.`
/// for a lone tick).
pub fn tick_label(x: f64, step: f64) -> String {
    let x = if x == 0. { 0. } else { x }; // no "-0"
    if step > 0. { format!("{:.*}", decimals(step), x) }
    else { format!("{x}") }
}

/// A colorbar with labelled ticks spanning the range of a mapping.
pub struct Legend<'a> {
    mapping: &'a ColorMapping,
    orientation: Orientation,
    style: LegendStyle,
}

impl<'a> Legend<'a> {
    pub fn new(mapping: &'a ColorMapping, orientation: Orientation,
               style: LegendStyle) -> Self {
        Legend { mapping, orientation, style }
    }

    /// Draw the legend.
    pub fn render(&self) -> RgbImage {
        let range = self.mapping.range();
        let scale = self.style.font_scale.max(1);
        let length = self.style.length.max(2);
        let thick = self.style.thickness.max(1);
        let margin = self.style.margin.max(1);
        let tick_len = 2 * scale + 2;
        let gap = 2 * scale;
        let label_h = GLYPH_H * scale;

        let (values, step) = ticks(range, self.style.max_ticks);
        let labels: Vec<(f64, String)> = values.iter()
            .map(|&x| (x, tick_label(x, step)))
            .collect();
        let label_w = labels.iter()
            .map(|(_, l)| font::text_width(l, scale))
            .max().unwrap_or(0);
        let colors = self.mapping.gradient()
            .range(range.min(), range.max(), length as usize)
            .map(|(_, c)| {
                let c = RGB8::from_rgba(c);
                Rgb([c.r, c.g, c.b])
            });
        // Offset of a value along the bar, from its low end.
        let offset = |x: f64| {
            (range.normalize(x) * (length - 1) as f64).round() as i64
        };

        match self.orientation {
            Orientation::Horizontal => {
                let side = margin + label_w / 2;
                let w = 2 * side + length;
                let h = 2 * margin + thick + tick_len + gap + label_h;
                let mut img = RgbImage::from_pixel(w, h, WHITE);
                let (x0, y0) = (side as i64, margin as i64);
                for (i, c) in colors.enumerate() {
                    font::fill(&mut img, x0 + i as i64, y0, 1, thick, c);
                }
                frame(&mut img, x0, y0, length, thick);
                for (x, label) in &labels {
                    let px = x0 + offset(*x);
                    let ty = y0 + thick as i64;
                    font::fill(&mut img, px, ty, 1, tick_len, BLACK);
                    let lw = font::text_width(label, scale) as i64;
                    font::draw_text(&mut img, px - lw / 2,
                                    ty + (tick_len + gap) as i64,
                                    label, scale, BLACK);
                }
                img
            }
            Orientation::Vertical => {
                let w = 2 * margin + thick + tick_len + gap + label_w;
                let h = 2 * margin + label_h + length;
                let mut img = RgbImage::from_pixel(w, h, WHITE);
                let (x0, y0) = (margin as i64, (margin + label_h / 2) as i64);
                // Top row holds the highest value.
                for (j, c) in colors.rev().enumerate() {
                    font::fill(&mut img, x0, y0 + j as i64, thick, 1, c);
                }
                frame(&mut img, x0, y0, thick, length);
                for (x, label) in &labels {
                    let py = y0 + (length - 1) as i64 - offset(*x);
                    let tx = x0 + thick as i64;
                    font::fill(&mut img, tx, py, tick_len, 1, BLACK);
                    font::draw_text(&mut img, tx + (tick_len + gap) as i64,
                                    py - (label_h / 2) as i64,
                                    label, scale, BLACK);
                }
                img
            }
        }
    }

    /// Render the legend and write it to `path`, in the format given
    /// by its extension.  An unsupported extension fails before
    /// anything is written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = LegendFormat::from_path(path)?;
        let img = self.render();
        img.save_with_format(path, format.image_format())
            .map_err(|e| match e {
                ImageError::IoError(e) => Error::io(path, e),
                e => Error::Image(e),
            })?;
        info!("saved {:?} colorbar ({}×{}) to {}", self.orientation,
              img.width(), img.height(), path.display());
        Ok(())
    }
}

/// One-pixel black frame around the `w`×`h` box at (`x`, `y`).
fn frame(img: &mut RgbImage, x: i64, y: i64, w: u32, h: u32) {
    font::fill(img, x - 1, y - 1, w + 2, 1, BLACK);
    font::fill(img, x - 1, y + h as i64, w + 2, 1, BLACK);
    font::fill(img, x - 1, y, 1, h, BLACK);
    font::fill(img, x + w as i64, y, 1, h, BLACK);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;
    use std::path::PathBuf;

    fn mapping(lo: f64, hi: f64) -> ColorMapping {
        ColorMapping::new(Colormap::Viridis, ValueRange::new(lo, hi))
    }

    fn to_rgb(c: rgb::RGBA8) -> Rgb<u8> { Rgb([c.r, c.g, c.b]) }

    #[test]
    fn formats_from_extension() {
        let f = |p: &str| LegendFormat::from_path(Path::new(p));
        assert_eq!(f("legend.png").unwrap(), LegendFormat::Png);
        assert_eq!(f("out/Legend.PNG").unwrap(), LegendFormat::Png);
        assert_eq!(f("a.jpeg").unwrap(), LegendFormat::Jpeg);
        assert_eq!(f("a.JPG").unwrap(), LegendFormat::Jpeg);
        assert_eq!(f("a.tif").unwrap(), LegendFormat::Tiff);
        assert_eq!(f("a.bmp").unwrap(), LegendFormat::Bmp);
        // "xpng" ends in "png" but is not a png extension.
        for p in ["legend.xyz", "legend", "legend.xpng", "png"] {
            assert!(matches!(f(p), Err(Error::UnsupportedFormat { path })
                             if path == PathBuf::from(p)), "{p}");
        }
    }

    #[test]
    fn nice_ticks() {
        let (t, step) = ticks(ValueRange::new(1., 5.), 6);
        assert_eq!(step, 1.);
        assert_eq!(t, vec![1., 2., 3., 4., 5.]);
        let (t, step) = ticks(ValueRange::new(0., 1.), 6);
        assert_eq!(step, 0.2);
        assert_eq!(t.len(), 6);
        let (t, _) = ticks(ValueRange::new(-0.37, 0.81), 5);
        assert!(t.len() <= 5 && t.len() >= 2);
        assert!(t.iter().all(|&x| (-0.37 ..= 0.81).contains(&x)));
        assert_eq!(ticks(ValueRange::new(3., 3.), 6), (vec![3.], 0.));
        assert_eq!(ticks(ValueRange::new(0., 1.), 0).0, Vec::<f64>::new());
    }

    #[test]
    fn labels() {
        assert_eq!(tick_label(2., 1.), "2");
        assert_eq!(tick_label(0.4, 0.2), "0.4");
        assert_eq!(tick_label(0.75, 0.25), "0.75");
        assert_eq!(tick_label(-0., 0.5), "0.0");
        assert_eq!(tick_label(3., 0.), "3");
        assert_eq!(tick_label(1500., 500.), "1500");
    }

    #[test]
    fn horizontal_runs_low_to_high() {
        let m = mapping(1., 5.);
        let style = LegendStyle::default();
        let img = Legend::new(&m, Orientation::Horizontal, style).render();
        assert!(img.width() > style.length);
        let (values, _) = ticks(m.range(), style.max_ticks);
        let side = style.margin
            + values.iter()
                .map(|&x| font::text_width(&tick_label(x, 1.), style.font_scale))
                .max().unwrap() / 2;
        let y = style.margin + style.thickness / 2;
        assert_eq!(*img.get_pixel(side, y), to_rgb(m.rgba8(1.)));
        assert_eq!(*img.get_pixel(side + style.length - 1, y),
                   to_rgb(m.rgba8(5.)));
    }

    #[test]
    fn vertical_runs_bottom_to_top() {
        let m = mapping(0., 10.);
        let style = LegendStyle { length: 100, ..LegendStyle::default() };
        let img = Legend::new(&m, Orientation::Vertical, style).render();
        assert!(img.height() > style.length);
        let x = style.margin + style.thickness / 2;
        let top = style.margin + GLYPH_H * style.font_scale / 2;
        assert_eq!(*img.get_pixel(x, top), to_rgb(m.rgba8(10.)));
        assert_eq!(*img.get_pixel(x, top + style.length - 1),
                   to_rgb(m.rgba8(0.)));
    }

    #[test]
    fn degenerate_range_renders() {
        let m = mapping(3., 3.);
        for o in [Orientation::Horizontal, Orientation::Vertical] {
            let img = Legend::new(&m, o, LegendStyle::default()).render();
            assert!(img.width() > 0 && img.height() > 0);
        }
    }

    #[test]
    fn unsupported_format_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("legend.xyz");
        let m = mapping(1., 5.);
        let r = Legend::new(&m, Orientation::Horizontal,
                            LegendStyle::default()).save(&out);
        assert!(matches!(r, Err(Error::UnsupportedFormat { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("legend.png");
        let m = mapping(1., 5.);
        Legend::new(&m, Orientation::Vertical, LegendStyle::default())
            .save(&out).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("legend.png");
        let m = mapping(1., 5.);
        let r = Legend::new(&m, Orientation::Horizontal,
                            LegendStyle::default()).save(&out);
        assert!(matches!(r, Err(Error::Io { .. })), "{r:?}");
    }
}
