use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use labscan_gs1::decode;
use labscan_model::{DisplayOptions, ParsedBarcode};

use labscan_cli::report::{ai_table, render_json, render_text, scan_table};

use crate::cli::{DecodeArgs, OutputFormatArg};

pub fn run_ais() -> Result<()> {
    println!("{}", ai_table());
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let options = DisplayOptions::new()
        .with_date_format(args.date_format.as_str())
        .context("invalid --date-format")?;

    let mut codes = args.codes.clone();
    if args.stdin {
        codes.extend(read_codes(io::stdin().lock()).context("read codes from stdin")?);
    }
    if codes.is_empty() {
        bail!("no codes given; pass codes as arguments or use --stdin");
    }

    let results: Vec<ParsedBarcode> = codes
        .iter()
        .enumerate()
        .map(|(index, code)| info_span!("scan", index).in_scope(|| decode(code)))
        .collect();
    let recognized = results.iter().filter(|parsed| parsed.recognized_as_gs1).count();
    info!(scans = results.len(), recognized, "decoded scans");

    match args.format {
        OutputFormatArg::Json => {
            println!("{}", render_json(&results).context("serialize results")?);
        }
        OutputFormatArg::Text => {
            for parsed in &results {
                println!("{}", render_text(parsed, &options, args.check_digits));
            }
        }
        OutputFormatArg::Table => {
            for parsed in &results {
                println!("{}", parsed.raw_input);
                if parsed.is_empty() {
                    println!("  (no GS1 data)");
                } else {
                    println!("{}", scan_table(parsed, &options, args.check_digits));
                }
            }
        }
    }
    Ok(())
}

/// Non-empty lines of `reader`, with a trailing carriage return removed.
fn read_codes(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let code = line.strip_suffix('\r').unwrap_or(&line);
        if code.is_empty() {
            warn!(line = number + 1, "skipping empty input line");
            continue;
        }
        codes.push(code.to_string());
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_codes_skips_blank_lines_and_carriage_returns() {
        let input = "(01)12345678901234\r\n\nabc\n";
        let codes = read_codes(input.as_bytes()).unwrap();
        assert_eq!(codes, vec!["(01)12345678901234", "abc"]);
    }

    #[test]
    fn decode_rejects_time_only_date_format() {
        let args = DecodeArgs {
            codes: vec!["(17)261231".to_string()],
            stdin: false,
            format: OutputFormatArg::Text,
            check_digits: false,
            date_format: "%H".to_string(),
        };
        let err = run_decode(&args).unwrap_err();
        assert!(err.to_string().contains("invalid --date-format"));
    }
}
