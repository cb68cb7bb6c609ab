use mortgage_core::Mortgage;
use rust_decimal::Decimal;
use std::fs;
use std::io::{self, Read};
use std::str::FromStr;

/// Read record lines from a file, or from stdin when no path is given
/// and data is being piped.
pub fn read_lines(path: Option<&str>) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let contents = match path {
        Some(p) => fs::read_to_string(p).map_err(|e| format!("Failed to read '{p}': {e}"))?,
        None => {
            if atty::is(atty::Stream::Stdin) {
                return Err("provide a records file or pipe records on stdin".into());
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(contents.lines().map(str::to_string).collect())
}

/// Parse one comma-separated record line into a validated mortgage.
/// Field order: amount, rate name, frequency name, amortization years.
/// Names are looked up directly against the catalog; no evaluation of
/// the input is ever performed.
pub fn parse_record(line: &str) -> Result<Mortgage, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(format!(
            "expected 4 fields (amount,rate,frequency,amortization), got {}",
            fields.len()
        ));
    }

    let amount = Decimal::from_str(fields[0])
        .map_err(|_| format!("amount '{}' is not a number", fields[0]))?;
    let amortization: u32 = fields[3]
        .parse()
        .map_err(|_| format!("amortization '{}' is not an integer", fields[3]))?;

    Mortgage::new(amount, fields[1], fields[2], amortization).map_err(|e| e.to_string())
}
