//! Run command implementation

use anyhow::{bail, Result};
use logstream_core::StreamConfig;
use logstream_sort::{locate_streams, StreamScan};
use tracing::info;

use super::{check_strict, load_config};
use crate::cli::RunArgs;
use crate::output::{is_json_mode, print_json, print_scan, ScanJson};

pub fn execute(args: RunArgs) -> Result<()> {
    let (config, path) = load_config(args.config.as_deref())?;
    info!("Loaded {} stream(s) from {}", config.streams.len(), path.display());

    let selected: Vec<&StreamConfig> = match &args.stream {
        Some(name) => match config.stream(name) {
            Some(stream) => vec![stream],
            None => bail!("Stream not found in {}: {}", path.display(), name),
        },
        None => config.streams.iter().collect(),
    };

    let mut scans: Vec<(&StreamConfig, StreamScan)> = Vec::with_capacity(selected.len());
    for stream in selected {
        let pattern = stream.compile()?;
        let scan = locate_streams(&stream.log_directory, &pattern);

        if !is_json_mode() {
            print_scan(Some(&stream.name), &scan, pattern.priority());
        }
        scans.push((stream, scan));
    }

    if is_json_mode() {
        let json: Vec<ScanJson> = scans
            .iter()
            .map(|(stream, scan)| ScanJson::new(Some(&stream.name), scan))
            .collect();
        print_json(&json);
    }

    let results: Vec<&StreamScan> = scans.iter().map(|(_, scan)| scan).collect();
    check_strict(&results, args.strict)
}
