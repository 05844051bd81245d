use crate::constants::PERCENT_DECIMALS;
use crate::error::{Error, Result};
use crate::format;
use crate::model::{ScanResult, SubdirectoryTotal};
use std::io::{self, Write};

const SEPARATOR: &str = "    ";

/// Largest first. Equal totals keep discovery order.
pub fn sort(totals: &[SubdirectoryTotal]) -> Vec<&SubdirectoryTotal> {
    let mut sorted: Vec<&SubdirectoryTotal> = totals.iter().collect();
    sorted.sort_by(|a, b| b.total_size.cmp(&a.total_size));
    sorted
}

#[allow(clippy::cast_precision_loss)]
pub fn percent_of(bytes: u64, grand_total: u64) -> Result<f64> {
    if grand_total == 0 {
        return Err(Error::DivisionUndefined);
    }
    Ok(bytes as f64 / grand_total as f64 * 100.0)
}

pub fn render(result: &ScanResult, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Directory size with subdirectories: {}",
        format::format(result.grand_total)
    )?;
    writeln!(out)?;

    for total in sort(&result.totals) {
        // An empty tree reports every entry at 0%.
        let percent = match percent_of(total.total_size, result.grand_total) {
            Ok(p) => p,
            Err(Error::DivisionUndefined) => 0.0,
            Err(e) => return Err(io::Error::other(e)),
        };
        writeln!(
            out,
            "Directory path: \"{}\"{SEPARATOR}Percent of total: {percent:.PERCENT_DECIMALS$}%{SEPARATOR}Size: {}",
            total.path.display(),
            format::format(total.total_size)
        )?;
    }

    for failure in &result.failures {
        writeln!(
            out,
            "Skipped: \"{}\"{SEPARATOR}Reason: {}",
            failure.path.display(),
            failure.reason
        )?;
    }

    Ok(())
}
