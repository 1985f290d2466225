//! Painting an attribute table onto a structure.

use std::path::Path;

use log::debug;

use crate::colormap::Colormap;
use crate::error::{Error, Result};
use crate::renderer::{Selection, StructureRenderer};
use crate::scale::{ColorMapping, Scales};
use crate::table::{AttributeTable, Chain, RejectedLine};

/// Field of the host's atoms receiving the raw values.
pub const B_FACTOR: &str = "b";

/// Which range values are normalized over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Norm {
    /// The range of all chains, so colors compare across chains.
    #[default]
    Global,
    /// The range of the chain being painted.
    Local,
}

/// Options of [`AttributePainter::paint_chain`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PaintOptions {
    pub norm: Norm,
    /// Paint with this colormap instead of the painter's one, keeping
    /// the range selected by `norm`.
    pub colormap: Option<Colormap>,
}

/// An attribute table with its color scales.
///
/// Everything is computed at construction; painting only reads.
#[derive(Clone, Debug)]
pub struct AttributePainter {
    table: AttributeTable,
    rejected: Vec<RejectedLine>,
    scales: Scales,
}

/// The name under which the color of a residue is registered.
pub fn color_name(chain: &str, resi: i64) -> String {
    format!("chain{chain}res{resi}")
}

/// The median of `values`; the mean of the two middle values for an
/// even count.
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut v: Vec<f64> = values.into_iter().collect();
    if v.is_empty() { return None }
    v.sort_by(f64::total_cmp);
    let n = v.len();
    if n % 2 == 1 { Some(v[n / 2]) }
    else { Some(0.5 * (v[n / 2 - 1] + v[n / 2])) }
}

impl AttributePainter {
    /// Build the scales of `table`.  Fails with [`Error::NoData`] if it
    /// is empty.
    pub fn new(table: AttributeTable, colormap: Colormap) -> Result<Self> {
        let scales = Scales::build(&table, colormap)?;
        Ok(AttributePainter { table, rejected: vec![], scales })
    }

    /// Load the CSV file at `path` and build its scales.
    pub fn load(path: impl AsRef<Path>, colormap: Colormap) -> Result<Self> {
        let (table, rejected) = AttributeTable::load(path)?;
        let mut painter = Self::new(table, colormap)?;
        painter.rejected = rejected;
        Ok(painter)
    }

    pub fn table(&self) -> &AttributeTable { &self.table }

    /// The CSV lines skipped while loading.
    pub fn rejected(&self) -> &[RejectedLine] { &self.rejected }

    pub fn scales(&self) -> &Scales { &self.scales }

    /// The colormap the scales were built with.
    pub fn colormap(&self) -> Colormap { self.scales.global().colormap() }

    /// The mapping used to paint `chain` with `options`.
    pub fn mapping(&self, chain: &str, options: &PaintOptions)
                   -> Result<ColorMapping> {
        let m = match options.norm {
            Norm::Global => self.scales.global(),
            Norm::Local => self.scales.chain(chain)?,
        };
        Ok(match options.colormap {
            Some(c) if c != m.colormap() => m.with_colormap(c),
            _ => m.clone(),
        })
    }

    fn chain(&self, chain: &str) -> Result<&Chain> { self.table.chain(chain) }

    /// Register one color per residue of `chain` and apply it.
    pub fn paint_chain<R>(&self, renderer: &mut R, chain: &str,
                          options: &PaintOptions) -> Result<()>
    where R: StructureRenderer + ?Sized {
        let residues = self.chain(chain)?;
        let mapping = self.mapping(chain, options)?;
        debug!("painting chain {chain} ({} residues) with {} over [{}, {}]",
               residues.len(), mapping.colormap(),
               mapping.range().min(), mapping.range().max());
        for (&resi, &x) in residues {
            let name = color_name(chain, resi);
            renderer.set_color(&name, mapping.unit_rgb(x))
                .map_err(Error::Renderer)?;
            renderer.color(&name, &Selection::residue(chain, resi))
                .map_err(Error::Renderer)?;
        }
        Ok(())
    }

    /// Paint every chain of the table.
    pub fn paint_all<R>(&self, renderer: &mut R, options: &PaintOptions)
                        -> Result<()>
    where R: StructureRenderer + ?Sized {
        for chain in self.table.chain_ids() {
            self.paint_chain(renderer, chain, options)?;
        }
        Ok(())
    }

    /// Store the values of `chain` in the b-factor field: every atom
    /// first gets the median of the chain, then each listed residue
    /// gets its own value.
    pub fn modify_bfactors<R>(&self, renderer: &mut R, chain: &str)
                              -> Result<()>
    where R: StructureRenderer + ?Sized {
        let residues = self.chain(chain)?;
        let m = median(residues.values().copied()).ok_or(Error::NoData)?;
        debug!("b-factors of chain {chain}: default {m}");
        renderer.set_property(&Selection::All, B_FACTOR, m)
            .map_err(Error::Renderer)?;
        for (&resi, &x) in residues {
            renderer.set_property(&Selection::residue(chain, resi),
                                  B_FACTOR, x).map_err(Error::Renderer)?;
        }
        Ok(())
    }

    /// [`modify_bfactors`](Self::modify_bfactors) for each chain in
    /// order.  The whole-structure default set for a chain replaces the
    /// one set for the previous chains.
    pub fn modify_all_bfactors<R>(&self, renderer: &mut R) -> Result<()>
    where R: StructureRenderer + ?Sized {
        for chain in self.table.chain_ids() {
            self.modify_bfactors(renderer, chain)?;
        }
        Ok(())
    }
}
