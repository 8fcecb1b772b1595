//! Converts a tab-separated reading dictionary into the compact binary
//! format the engine loads.
//!
//! ```text
//! gen-migemo-dict input.txt output.bin
//! ```
//!
//! Input lines are `reading<TAB>surface<TAB>surface...`; lines starting
//! with `#` are skipped. Readings the compact codec cannot express are
//! dropped from the output and listed on stderr.

use std::collections::BTreeMap;
use std::process::ExitCode;

use unifind::CompactDictionaryBuilder;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gen-migemo-dict: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        return Err("usage: gen-migemo-dict INPUT OUTPUT".into());
    };

    let text = std::fs::read_to_string(input).map_err(|e| format!("{input}: {e}"))?;
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for line in text.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let Some(reading) = fields.next() else {
            continue;
        };
        let surfaces = entries.entry(reading.to_string()).or_default();
        surfaces.extend(fields.filter(|s| !s.is_empty()).map(str::to_string));
    }
    entries.retain(|_, surfaces| !surfaces.is_empty());

    let (bytes, skipped) = CompactDictionaryBuilder::build(&entries);
    for reading in &skipped {
        eprintln!("skipped unencodable reading: {reading}");
    }
    std::fs::write(output, &bytes).map_err(|e| format!("{output}: {e}"))?;
    eprintln!(
        "wrote {} bytes, {} readings ({} skipped)",
        bytes.len(),
        entries.len() - skipped.len(),
        skipped.len()
    );
    Ok(())
}
