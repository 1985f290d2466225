//! Per-residue attribute tables read from CSV files.
//!
//! Each line holds `chain,residue,value`.  Lines starting with `#`
//! are comments.  Malformed lines are skipped and reported; they never
//! abort a load.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::error::{Error, Result};

/// Values of one chain, keyed by residue number.
pub type Chain = BTreeMap<i64, f64>;

/// Mapping chain → residue → value.
///
/// Built once from a CSV file and never updated; a new file means a
/// new table.  Chains and residues iterate in sorted order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeTable {
    chains: BTreeMap<String, Chain>,
}

/// Why a CSV line was skipped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("line is not valid UTF-8")]
    Encoding,
    #[error("expected 3 comma-separated fields, found {0}")]
    MissingFields(usize),
    #[error("chain identifier is empty")]
    EmptyChain,
    #[error("residue number '{0}' is not an integer")]
    Residue(String),
    #[error("value '{0}' is not a number")]
    Value(String),
    #[error("value '{0}' is not finite")]
    NonFinite(String),
}

/// A CSV line that was skipped while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line: usize,
    /// The raw content of the line, without its terminator.
    pub content: String,
    pub reason: RejectReason,
}

fn parse_line(line: &str) -> std::result::Result<(&str, i64, f64), RejectReason> {
    let mut cells = line.split(',').map(str::trim);
    let (chain, resi, value) = match (cells.next(), cells.next(), cells.next()) {
        (Some(c), Some(r), Some(v)) => (c, r, v),
        _ => return Err(RejectReason::MissingFields(line.split(',').count())),
    };
    if chain.is_empty() { return Err(RejectReason::EmptyChain) }
    let resi: i64 = resi.parse()
        .map_err(|_| RejectReason::Residue(resi.to_string()))?;
    let x: f64 = value.parse()
        .map_err(|_| RejectReason::Value(value.to_string()))?;
    if !x.is_finite() {
        return Err(RejectReason::NonFinite(value.to_string()))
    }
    Ok((chain, resi, x))
}

impl AttributeTable {
    /// Parse CSV lines from `reader`.
    ///
    /// Returns the table and the lines that were rejected, in file
    /// order.  Each rejection is also logged; a line that is not valid
    /// UTF-8 is rejected like any other malformed line.  Blank lines
    /// are skipped without a diagnostic.  A residue listed twice keeps
    /// its last value.
    pub fn read<R: BufRead>(reader: R)
                            -> std::io::Result<(Self, Vec<RejectedLine>)> {
        let mut table = AttributeTable::default();
        let mut rejected = vec![];
        for (i, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') { raw.pop(); }
            let lineno = i + 1;
            let (line, parsed) = match String::from_utf8(raw) {
                Ok(line) => {
                    if line.starts_with('#') || line.trim().is_empty() {
                        continue
                    }
                    let parsed = parse_line(&line)
                        .map(|(chain, resi, x)| (chain.to_string(), resi, x));
                    (line, parsed)
                }
                Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(),
                           Err(RejectReason::Encoding)),
            };
            match parsed {
                Ok((chain, resi, x)) => {
                    let _ = table.chains.entry(chain).or_default()
                        .insert(resi, x);
                }
                Err(reason) => {
                    warn!("line {lineno} ({line:?}) was rejected: {reason}");
                    rejected.push(RejectedLine { line: lineno, content: line,
                                                 reason });
                }
            }
        }
        Ok((table, rejected))
    }

    /// Read the CSV file at `path`.  See [`AttributeTable::read`].
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, Vec<RejectedLine>)> {
        let path = path.as_ref();
        let fh = File::open(path).map_err(|e| Error::io(path, e))?;
        let (table, rejected) = Self::read(BufReader::new(fh))
            .map_err(|e| Error::io(path, e))?;
        info!("{}: {} values on {} chains, {} lines rejected",
              path.display(), table.len(), table.chains.len(), rejected.len());
        Ok((table, rejected))
    }

    /// Total number of (chain, residue) entries.
    pub fn len(&self) -> usize {
        self.chains.values().map(|c| c.len()).sum()
    }

    /// True if no line was loaded.
    pub fn is_empty(&self) -> bool { self.chains.is_empty() }

    /// The values of `chain`, keyed by residue number.
    pub fn chain(&self, chain: &str) -> Result<&Chain> {
        self.chains.get(chain)
            .ok_or_else(|| Error::UnknownChain(chain.to_string()))
    }

    /// All chains, in sorted order.
    pub fn chains(&self) -> impl Iterator<Item = (&str, &Chain)> {
        self.chains.iter().map(|(id, c)| (id.as_str(), c))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// The value of residue `resi` in `chain`, if any.
    pub fn get(&self, chain: &str, resi: i64) -> Option<f64> {
        self.chains.get(chain)?.get(&resi).copied()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> (AttributeTable, Vec<RejectedLine>) {
        AttributeTable::read(s.as_bytes()).unwrap()
    }

    #[test]
    fn three_rows_two_chains() {
        let (t, rejected) = read("A,10,1.0\nA,11,5.0\nB,1,3.0");
        assert!(rejected.is_empty());
        assert_eq!(t.len(), 3);
        assert_eq!(t.chain_ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(t.get("A", 10), Some(1.0));
        assert_eq!(t.get("A", 11), Some(5.0));
        assert_eq!(t.get("B", 1), Some(3.0));
    }

    #[test]
    fn comments_whitespace_and_blank_lines() {
        let (t, rejected) = read("# chain,resi,value\n\
                                  \n  A, 10,  1.5\r\n\tB ,-3, 2e-1 \n   \n");
        assert!(rejected.is_empty(), "{rejected:?}");
        assert_eq!(t.get("A", 10), Some(1.5));
        assert_eq!(t.get("B", -3), Some(0.2));
    }

    #[test]
    fn non_integer_residue_is_reported() {
        let (t, rejected) = read("A,10,1.0\nA,x,5.0\n");
        assert_eq!(t.len(), 1);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].line, 2);
        assert_eq!(rejected[0].content, "A,x,5.0");
        assert_eq!(rejected[0].reason, RejectReason::Residue("x".into()));
    }

    #[test]
    fn counts_valid_and_malformed_lines() {
        let csv = "A,1,1\n\
                   A,2\n\
                   A,3,three\n\
                   B,4.5,1\n\
                   B,5,nan\n\
                   B,6,-2.5\n\
                   C,7,inf\n\
                   C,8,0\n";
        let (t, rejected) = read(csv);
        assert_eq!(t.len(), 3);
        assert_eq!(rejected.len(), 5);
        let lines: Vec<_> = rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3, 4, 5, 7]);
        assert_eq!(rejected[0].reason, RejectReason::MissingFields(2));
        assert_eq!(rejected[1].reason, RejectReason::Value("three".into()));
        assert_eq!(rejected[3].reason, RejectReason::NonFinite("nan".into()));
    }

    #[test]
    fn invalid_utf8_line_is_reported() {
        let (t, rejected) =
            AttributeTable::read(&b"A,10,1.0\nA,11,\xff5.0\r\nB,1,3.0\n"[..])
            .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("A", 10), Some(1.0));
        assert_eq!(t.get("B", 1), Some(3.0));
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].line, 2);
        assert_eq!(rejected[0].content, "A,11,\u{FFFD}5.0");
        assert_eq!(rejected[0].reason, RejectReason::Encoding);
    }

    #[test]
    fn empty_chain_is_reported() {
        let (t, rejected) = read("A,1,1.0\n,10,1.0\n  ,11,2.0\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.chain_ids().collect::<Vec<_>>(), vec!["A"]);
        let lines: Vec<_> = rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert!(rejected.iter().all(|r| r.reason == RejectReason::EmptyChain));
    }

    #[test]
    fn last_duplicate_wins() {
        let (t, _) = read("A,1,1.0\nA,1,2.0\n");
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("A", 1), Some(2.0));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let (t, rejected) = read("A,1,1.0,comment\n");
        assert!(rejected.is_empty());
        assert_eq!(t.get("A", 1), Some(1.0));
    }

    #[test]
    fn unknown_chain() {
        let (t, _) = read("A,1,1.0\n");
        assert!(matches!(t.chain("Z"), Err(Error::UnknownChain(c)) if c == "Z"));
    }

    #[test]
    fn empty_input() {
        let (t, rejected) = read("# nothing here\n");
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(rejected.is_empty());
    }
}
