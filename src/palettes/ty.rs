pub(crate) use rgb::RGBA;

/// The stops of a colormap, evenly spaced over \[0, 1\].
#[derive(Debug)]
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential: lightness progresses monotonically from low to
    /// high values.  Suited to attributes with no natural midpoint
    /// (conservation scores, B-factors, …).
    Seq,
    /// Diverging: light in the middle, dark with contrasting hues at
    /// both ends.  Suited to signed attributes such as ΔΔG where the
    /// center of the range is meaningful.
    Div,
}
