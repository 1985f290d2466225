//! The commands exposed to the host tool, one function per command.

use std::path::Path;

use log::info;

use crate::colormap::Colormap;
use crate::error::Result;
use crate::legend::{Legend, LegendFormat, LegendStyle, Orientation};
use crate::painter::{AttributePainter, PaintOptions};
use crate::renderer::StructureRenderer;

/// Registered command names.
pub const NAMES: [&str; 4] = ["colorFromCSV", "bfacsFromCSV",
                              "saveHorizontalColorbar", "saveVerticalColorbar"];

/// `colorFromCSV`: color every chain of the CSV file on the range of
/// all chains.
pub fn color_from_csv<R>(renderer: &mut R, csv: &Path, colormap: Colormap,
                         options: &PaintOptions) -> Result<AttributePainter>
where R: StructureRenderer + ?Sized {
    let painter = AttributePainter::load(csv, colormap)?;
    painter.paint_all(renderer, options)?;
    info!("painted {} residues from {}", painter.table().len(),
          csv.display());
    Ok(painter)
}

/// `bfacsFromCSV`: copy the values into the b-factor field.
pub fn bfacs_from_csv<R>(renderer: &mut R, csv: &Path)
                         -> Result<AttributePainter>
where R: StructureRenderer + ?Sized {
    let painter = AttributePainter::load(csv, Colormap::default())?;
    painter.modify_all_bfactors(renderer)?;
    Ok(painter)
}

fn save_colorbar(csv: &Path, out: &Path, colormap: Colormap,
                 orientation: Orientation, style: LegendStyle) -> Result<()> {
    LegendFormat::from_path(out)?;
    let painter = AttributePainter::load(csv, colormap)?;
    Legend::new(painter.scales().global(), orientation, style).save(out)
}

/// `saveHorizontalColorbar`: save the global scale of the CSV file as
/// an image, low values on the left.
pub fn save_horizontal_colorbar(csv: &Path, out: &Path, colormap: Colormap,
                                style: LegendStyle) -> Result<()> {
    save_colorbar(csv, out, colormap, Orientation::Horizontal, style)
}

/// `saveVerticalColorbar`: save the global scale of the CSV file as
/// an image, low values at the bottom.
pub fn save_vertical_colorbar(csv: &Path, out: &Path, colormap: Colormap,
                              style: LegendStyle) -> Result<()> {
    save_colorbar(csv, out, colormap, Orientation::Vertical, style)
}
