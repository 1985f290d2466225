//! Command line front end: host commands are written as a PyMOL
//! script, colorbars as images.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

use attribute_painter::{commands, Colormap, Config, Norm, PaintOptions,
                        PmlWriter};

#[derive(Parser)]
#[command(name = "attribute-painter", version)]
#[command(about = "Color structures by per-residue values read from a CSV file")]
struct Cli {
    /// TOML configuration file (default colormap, legend style)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the PyMOL commands to this file instead of stdout
    #[arg(long, global = true)]
    script: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Color all chains using the range of all chains
    #[command(name = "colorFromCSV")]
    ColorFromCsv {
        csv: PathBuf,
        colormap: Option<String>,
        /// Normalize each chain over its own range instead
        #[arg(long)]
        local: bool,
    },
    /// Store the values in the b-factor field
    #[command(name = "bfacsFromCSV")]
    BfacsFromCsv {
        csv: PathBuf,
    },
    /// Save a horizontal colorbar of the global range
    #[command(name = "saveHorizontalColorbar")]
    SaveHorizontalColorbar {
        csv: PathBuf,
        out: PathBuf,
        colormap: Option<String>,
    },
    /// Save a vertical colorbar of the global range
    #[command(name = "saveVerticalColorbar")]
    SaveVerticalColorbar {
        csv: PathBuf,
        out: PathBuf,
        colormap: Option<String>,
    },
    /// List the supported colormaps
    Colormaps,
}

/// Write the generated commands to `path`, or to stdout.  Called only
/// once a command succeeded, so a failure leaves an existing script
/// untouched.
fn write_script(path: Option<&Path>, script: PmlWriter<Vec<u8>>) -> Result<()> {
    let bytes = script.into_inner()?;
    match path {
        Some(p) => fs::write(p, bytes)
            .with_context(|| format!("cannot write script {}", p.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn report_rejected(painter: &attribute_painter::AttributePainter) {
    let n = painter.rejected().len();
    if n > 0 {
        warn!("{n} malformed line(s) skipped");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default()
                                  .default_filter_or("warn"))
        .init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(p) => Config::load(p)?,
        None => Config::default(),
    };
    let script_path = cli.script.as_deref();

    match cli.command {
        Command::ColorFromCsv { csv, colormap, local } => {
            let colormap = config.colormap_or(colormap.as_deref())?;
            let options = PaintOptions {
                norm: if local { Norm::Local } else { Norm::Global },
                colormap: None,
            };
            let mut out = PmlWriter::new(Vec::new());
            let painter = commands::color_from_csv(&mut out, &csv, colormap,
                                                   &options)
                .with_context(|| format!("colorFromCSV {}", csv.display()))?;
            write_script(script_path, out)?;
            report_rejected(&painter);
        }
        Command::BfacsFromCsv { csv } => {
            let mut out = PmlWriter::new(Vec::new());
            let painter = commands::bfacs_from_csv(&mut out, &csv)
                .with_context(|| format!("bfacsFromCSV {}", csv.display()))?;
            write_script(script_path, out)?;
            report_rejected(&painter);
        }
        Command::SaveHorizontalColorbar { csv, out, colormap } => {
            let colormap = config.colormap_or(colormap.as_deref())?;
            commands::save_horizontal_colorbar(&csv, &out, colormap,
                                               config.legend)
                .with_context(|| format!("saveHorizontalColorbar {}",
                                         csv.display()))?;
        }
        Command::SaveVerticalColorbar { csv, out, colormap } => {
            let colormap = config.colormap_or(colormap.as_deref())?;
            commands::save_vertical_colorbar(&csv, &out, colormap,
                                             config.legend)
                .with_context(|| format!("saveVerticalColorbar {}",
                                         csv.display()))?;
        }
        Command::Colormaps => {
            let mut stdout = io::stdout().lock();
            for c in Colormap::ALL {
                let kind = match c.typ() {
                    attribute_painter::PaletteType::Seq => "sequential",
                    attribute_painter::PaletteType::Div => "diverging",
                };
                writeln!(stdout, "{:<10} {kind}", c.name())?;
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() { Cli::command().debug_assert(); }

    #[test]
    fn subcommands_carry_registered_names() {
        let cli = Cli::command();
        for name in commands::NAMES {
            assert!(cli.find_subcommand(name).is_some(), "{name}");
        }
    }

    #[test]
    fn optional_colormap_argument() {
        let cli = Cli::try_parse_from(["attribute-painter", "colorFromCSV",
                                       "data.csv", "magma", "--local"])
            .unwrap();
        match cli.command {
            Command::ColorFromCsv { csv, colormap, local } => {
                assert_eq!(csv, PathBuf::from("data.csv"));
                assert_eq!(colormap.as_deref(), Some("magma"));
                assert!(local);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    fn run_args(args: &[&str]) -> Result<()> {
        let mut argv = vec!["attribute-painter"];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv)?)
    }

    #[test]
    fn failed_command_keeps_existing_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("keep.pml");
        fs::write(&script, "color red, all\n").unwrap();
        let script_arg = script.to_str().unwrap();
        let missing = dir.path().join("missing.csv");
        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "# nothing\nA,x,1\n").unwrap();
        for csv in [&missing, &empty] {
            let csv = csv.to_str().unwrap();
            assert!(run_args(&["--script", script_arg, "colorFromCSV", csv])
                    .is_err());
            assert!(run_args(&["--script", script_arg, "bfacsFromCSV", csv])
                    .is_err());
        }
        assert_eq!(fs::read_to_string(&script).unwrap(), "color red, all\n");
    }

    #[test]
    fn successful_command_writes_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("out.pml");
        let csv = dir.path().join("attr.csv");
        fs::write(&csv, "A,10,1.0\nA,11,5.0\n").unwrap();
        run_args(&["--script", script.to_str().unwrap(), "bfacsFromCSV",
                   csv.to_str().unwrap()]).unwrap();
        assert_eq!(fs::read_to_string(&script).unwrap(),
                   "alter all, b=3\n\
                    alter chain A and resi 10, b=1\n\
                    alter chain A and resi 11, b=5\n");
    }
}
