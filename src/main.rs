mod cli;
mod grouper;
mod manifest;
mod scan;
mod util;
mod writer;

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            input,
            col,
            scan_all,
        } => {
            if !input.exists() {
                eprintln!("Input table does not exist: {}", input.display());
                std::process::exit(2);
            }

            let roots = scan::load_path_column(&input, &col)?;
            let mut stdout = io::stdout().lock();
            for root in &roots {
                for path in scan::scan_root(Path::new(root), scan_all) {
                    writeln!(stdout, "{}", path.display())?;
                }
            }
            Ok(())
        }

        Command::Manifest { list, output } => {
            let paths: Vec<String> = match list {
                Some(list) => {
                    if !list.exists() {
                        eprintln!("List file does not exist: {}", list.display());
                        std::process::exit(2);
                    }
                    std::fs::read_to_string(&list)?
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string)
                        .collect()
                }
                None => {
                    let mut paths = Vec::new();
                    for line in io::stdin().lock().lines() {
                        let line = line?;
                        let line = line.trim();
                        if !line.is_empty() {
                            paths.push(line.to_string());
                        }
                    }
                    paths
                }
            };

            let records = manifest::collect_records(&paths)?;
            match output {
                Some(path) => writer::write_records(&path, &records)?,
                None => writer::write_records_to(io::stdout().lock(), &records)?,
            }
            Ok(())
        }

        Command::Group {
            results,
            limit_tb,
            prefix,
            json,
        } => {
            // Validate the limit before touching the manifest so a bad
            // configuration never produces partial artifacts.
            let limit_bytes = util::tb_to_bytes(limit_tb)?;

            if !results.exists() {
                eprintln!("Manifest does not exist: {}", results.display());
                std::process::exit(2);
            }

            let records = manifest::load_manifest(&results)?;

            // The unsplit full list is an audit artifact in its own right and
            // is written before grouping, even when the manifest is empty.
            let full_list = writer::full_list_path(&prefix);
            writer::write_records(&full_list, &records)?;

            let groups = grouper::group_records(&records, limit_bytes)?;
            for group in &groups {
                writer::write_records(&writer::group_path(&prefix, group.index), &group.members)?;
            }

            if json {
                let summary = serde_json::json!({
                    "records": records.len(),
                    "total_bytes": records.iter().map(|r| r.size).sum::<u64>(),
                    "limit_bytes": limit_bytes,
                    "full_list": full_list,
                    "groups": groups
                        .iter()
                        .map(|g| serde_json::json!({
                            "index": g.index,
                            "members": g.members.len(),
                            "total_size": g.total_size,
                            "path": writer::group_path(&prefix, g.index),
                        }))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Done: records={} groups={} full_list={}",
                    records.len(),
                    groups.len(),
                    full_list.display()
                );
            }
            Ok(())
        }
    }
}
