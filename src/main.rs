//! delimtab - print selected columns of a delimited text file

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use delimtab::config::{Config, OutputFormat};
use delimtab::{Table, TableWriter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Print selected columns of a delimiter-separated text file
#[derive(Parser, Debug)]
#[command(name = "delimtab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read
    file: PathBuf,

    /// Column(s) to print (comma-separated); defaults to all
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Input delimiter; sniffed from the header when omitted
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Delimiter for text output
    #[arg(long, default_value_t = ',')]
    output_delimiter: char,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliOutputFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::new().with_write_delimiter(cli.output_delimiter);
    if let Some(d) = cli.delimiter {
        config = config.with_delimiter(d);
    }

    let file = File::open(&cli.file)
        .with_context(|| format!("Failed to open file: {}", cli.file.display()))?;
    let mut table = Table::with_config(config.clone());
    table
        .load_from_reader(file)
        .with_context(|| format!("Failed to read file: {}", cli.file.display()))?;

    let columns = if cli.columns.is_empty() {
        table.column_names()
    } else {
        cli.columns
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match OutputFormat::from(cli.format) {
        OutputFormat::Text => {
            // nothing reaches stdout unless every row is written
            let mut writer = TableWriter::with_config(Vec::new(), columns, &config)?;
            for (i, row) in table.iter().enumerate() {
                writer
                    .write_row(row)
                    .with_context(|| format!("Row {}", i + 1))?;
            }
            out.write_all(&writer.into_inner())?;
            out.flush()?;
        }
        OutputFormat::Json => {
            let mut records = Vec::with_capacity(table.len());
            for (i, row) in table.iter().enumerate() {
                let mut record = Map::new();
                for column in &columns {
                    let cell = row.at(column).with_context(|| format!("Row {}", i + 1))?;
                    record.insert(column.clone(), Value::String(cell.to_string()));
                }
                records.push(Value::Object(record));
            }
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
