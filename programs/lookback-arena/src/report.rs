//! Console rendering of final standings

use std::io::Write;

use crate::player::Player;
use crate::tournament::Standing;

/// Output format for the standings table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// `position,score,average cooperate,name` rows
    #[default]
    Csv,
    /// JSON array of standing objects
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    standings: &[Standing],
    format: ReportFormat,
) -> anyhow::Result<()> {
    match format {
        ReportFormat::Csv => write_csv(out, standings),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, standings)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_csv<W: Write>(out: &mut W, standings: &[Standing]) -> anyhow::Result<()> {
    writeln!(out, "position,score,average cooperate,name")?;
    for s in standings {
        writeln!(out, "{},{},{:?},{}", s.position, s.score, s.cooperation_rate, s.name)?;
    }
    Ok(())
}

/// One line per player: name, then every table entry as `C`/`D`
pub fn write_tables<W: Write>(out: &mut W, players: &[Player]) -> anyhow::Result<()> {
    for p in players {
        writeln!(out, "{:<24}{}", p.name(), p.table())?;
    }
    Ok(())
}
