use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cimbin_tools::{
    decode_stream, format_decode_pretty, hex_dump, inspect_stream, sample_objects, InspectReport,
};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{encode_object_stream, CodecLimits, CodecOptions};
use glob::Pattern;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cimbin-tools",
    version,
    about = "cimbin inspection and decoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect object streams and per-object sizes.
    Inspect {
        /// Path to a stream file or a directory of them.
        stream_path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected streams.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected streams (after sorting).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Decode every object in a stream.
    Decode {
        /// Path to the stream file.
        stream_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeFormat::Json)]
        format: DecodeFormat,
        /// Reject illegal names, hosts and malformed UTF-16.
        #[arg(long)]
        validate: bool,
    },
    /// Hex dump a file slot by slot.
    Dump {
        /// Path to the file.
        path: PathBuf,
        /// Bytes per line, rounded up to whole slots (at most 4096).
        #[arg(long, default_value_t = 16)]
        width: usize,
    },
    /// Write a sample stream.
    Sample {
        /// Output path.
        output: PathBuf,
        /// Write without magic markers.
        #[arg(long)]
        unframed: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Size,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            stream_path,
            glob,
            sort,
            limit,
        } => {
            if stream_path.is_dir() {
                let entries = collect_stream_entries(&stream_path, glob.as_deref())?;
                info!(count = entries.len(), dir = %stream_path.display(), "inspecting streams");
                let mut entries = maybe_sort_entries(entries, sort);
                let limit = limit.or(sort.map(|InspectSort::Size| 10));
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in entries {
                    let report = inspect_file(&entry.path)?;
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    print_inspect_report(&report);
                }
            } else {
                let report = inspect_file(&stream_path)?;
                print_inspect_report(&report);
            }
        }
        Command::Decode {
            stream_file,
            format,
            validate,
        } => {
            let bytes = read_file(&stream_file)?;
            let output = decode_stream(&bytes, validate, CodecLimits::default())?;
            info!(objects = output.objects.len(), validate, "decoded stream");
            match format {
                DecodeFormat::Json => {
                    let json = serde_json::to_string_pretty(&output).context("serialize json")?;
                    println!("{json}");
                }
                DecodeFormat::Pretty => {
                    print!("{}", format_decode_pretty(&output));
                }
            }
        }
        Command::Dump { path, width } => {
            let bytes = read_file(&path)?;
            print!("{}", hex_dump(&bytes, width));
        }
        Command::Sample { output, unframed } => {
            let options = if unframed {
                CodecOptions::default().with_framing(wire::Framing::Unframed)
            } else {
                CodecOptions::default()
            };
            let objects = sample_objects();
            let bytes = encode_object_stream(&objects, &options).context("encode sample")?;
            fs::write(&output, &bytes)
                .with_context(|| format!("write sample {}", output.display()))?;
            info!(
                objects = objects.len(),
                bytes = bytes.len(),
                path = %output.display(),
                "wrote sample stream"
            );
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("read stream {}", path.display()))?;
    debug!(path = %path.display(), len = bytes.len(), "read file");
    Ok(bytes)
}

fn inspect_file(path: &Path) -> Result<InspectReport> {
    let bytes = read_file(path)?;
    inspect_stream(&bytes, CodecLimits::default())
        .with_context(|| format!("inspect {}", path.display()))
}

struct StreamEntry {
    path: PathBuf,
    size: u64,
}

fn collect_stream_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<StreamEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                debug!(path = %path.display(), "skipped by glob");
                continue;
            }
        }
        let size = entry.metadata()?.len();
        entries.push(StreamEntry { path, size });
    }
    Ok(entries)
}

fn maybe_sort_entries(
    mut entries: Vec<StreamEntry>,
    sort: Option<InspectSort>,
) -> Vec<StreamEntry> {
    match sort {
        Some(InspectSort::Size) => {
            entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        }
        None => {}
    }
    entries
}

fn print_inspect_report(report: &InspectReport) {
    let header = report.header;
    let framing = if header.framing.is_framed() {
        "framed"
    } else {
        "unframed"
    };
    println!(
        "version: {} byte_order: {:?} framing: {framing}",
        header.version, header.byte_order
    );
    println!(
        "objects: {} ({} of {} bytes)",
        report.objects.len(),
        report.object_bytes(),
        report.total_len
    );
    for object in &report.objects {
        let class_name = if object.class_name.is_empty() {
            "-"
        } else {
            object.class_name.as_str()
        };
        print!(
            "  [{}] {} {class_name} @{} ({} bytes)",
            object.index, object.kind, object.offset, object.size
        );
        if object.kind == "class" {
            println!(", {} properties, {} methods", object.properties, object.methods);
        } else {
            println!(", {} properties", object.properties);
        }
    }
}
