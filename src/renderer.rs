//! The interface to the host visualization tool.
//!
//! The painter never touches structures itself: it issues the three
//! primitives of [`StructureRenderer`].  Color names registered with
//! [`StructureRenderer::set_color`] are global in the host, so a
//! renderer should not be shared by concurrent paint jobs.

use std::fmt;
use std::io::{self, Write};

use rgb::RGB;

/// The atoms an operation applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every atom of every loaded structure.
    All,
    /// The atoms of residue `resi` in `chain`.
    Residue { chain: String, resi: i64 },
}

impl Selection {
    pub fn residue(chain: &str, resi: i64) -> Self {
        Selection::Residue { chain: chain.to_string(), resi }
    }
}

/// Host selection syntax: `all` or `chain A and resi 10`.
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Residue { chain, resi } =>
                write!(f, "chain {chain} and resi {resi}"),
        }
    }
}

/// Operations a host visualization tool must provide.
pub trait StructureRenderer {
    /// Define (or redefine) the color `name`; components in \[0, 1\].
    fn set_color(&mut self, name: &str, rgb: RGB<f64>) -> io::Result<()>;

    /// Paint `selection` with the previously defined color `name`.
    fn color(&mut self, name: &str, selection: &Selection) -> io::Result<()>;

    /// Set the numeric per-atom `field` of `selection` to `value`.
    fn set_property(&mut self, selection: &Selection, field: &str,
                    value: f64) -> io::Result<()>;
}

impl<R: StructureRenderer + ?Sized> StructureRenderer for &mut R {
    fn set_color(&mut self, name: &str, rgb: RGB<f64>) -> io::Result<()> {
        (**self).set_color(name, rgb)
    }

    fn color(&mut self, name: &str, selection: &Selection) -> io::Result<()> {
        (**self).color(name, selection)
    }

    fn set_property(&mut self, selection: &Selection, field: &str,
                    value: f64) -> io::Result<()> {
        (**self).set_property(selection, field, value)
    }
}

/// Writes the operations as a PyMOL script (`.pml`), one command per
/// line, to be run with `@script.pml` or `pymol structure.pdb
/// script.pml`.
pub struct PmlWriter<W> {
    out: W,
}

impl<W: Write> PmlWriter<W> {
    pub fn new(out: W) -> Self { PmlWriter { out } }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> StructureRenderer for PmlWriter<W> {
    fn set_color(&mut self, name: &str, rgb: RGB<f64>) -> io::Result<()> {
        writeln!(self.out, "set_color {name}, [{:.6}, {:.6}, {:.6}]",
                 rgb.r, rgb.g, rgb.b)
    }

    fn color(&mut self, name: &str, selection: &Selection) -> io::Result<()> {
        writeln!(self.out, "color {name}, {selection}")
    }

    fn set_property(&mut self, selection: &Selection, field: &str,
                    value: f64) -> io::Result<()> {
        writeln!(self.out, "alter {selection}, {field}={value}")
    }
}

/// One call received by a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetColor { name: String, rgb: RGB<f64> },
    Color { name: String, selection: Selection },
    SetProperty { selection: Selection, field: String, value: f64 },
}

/// Keeps every call in memory.  Useful for dry runs and tests.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }
}

impl StructureRenderer for Recorder {
    fn set_color(&mut self, name: &str, rgb: RGB<f64>) -> io::Result<()> {
        self.calls.push(Call::SetColor { name: name.to_string(), rgb });
        Ok(())
    }

    fn color(&mut self, name: &str, selection: &Selection) -> io::Result<()> {
        self.calls.push(Call::Color { name: name.to_string(),
                                      selection: selection.clone() });
        Ok(())
    }

    fn set_property(&mut self, selection: &Selection, field: &str,
                    value: f64) -> io::Result<()> {
        self.calls.push(Call::SetProperty { selection: selection.clone(),
                                            field: field.to_string(), value });
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_syntax() {
        assert_eq!(Selection::All.to_string(), "all");
        assert_eq!(Selection::residue("A", 10).to_string(),
                   "chain A and resi 10");
        assert_eq!(Selection::residue("B", -2).to_string(),
                   "chain B and resi -2");
    }

    #[test]
    fn pml_commands() {
        let mut w = PmlWriter::new(Vec::new());
        let sel = Selection::residue("A", 10);
        w.set_color("chainAres10", RGB { r: 1., g: 0.5, b: 0. }).unwrap();
        w.color("chainAres10", &sel).unwrap();
        w.set_property(&Selection::All, "b", 2.5).unwrap();
        w.set_property(&sel, "b", 1.).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        assert_eq!(out, "set_color chainAres10, [1.000000, 0.500000, 0.000000]\n\
                         color chainAres10, chain A and resi 10\n\
                         alter all, b=2.5\n\
                         alter chain A and resi 10, b=1\n");
    }

    #[test]
    fn recorder_through_mut_ref() {
        fn paint_all<R: StructureRenderer>(mut r: R) {
            r.color("c", &Selection::All).unwrap();
        }
        let mut rec = Recorder::new();
        paint_all(&mut rec);
        assert_eq!(rec.calls, vec![Call::Color { name: "c".into(),
                                                 selection: Selection::All }]);
    }
}
