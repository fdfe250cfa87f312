//! Spreadbase CLI - ODS inspection and re-encoding tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spreadbase::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "spreadbase")]
#[command(author, version, about = "ODS spreadsheet inspection and re-encoding tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tables of a document as text grids
    Show {
        /// Input ODS file
        input: PathBuf,

        /// Only print the table with this name
        #[arg(short, long)]
        table: Option<String>,

        /// Treat the first row as a header row
        #[arg(long)]
        with_headers: bool,

        /// Decode fractional numbers as exact decimals
        #[arg(long)]
        floats_as_decimal: bool,
    },

    /// Decode a document and encode it again to another file
    Recode {
        /// Input ODS file
        input: PathBuf,

        /// Output ODS file
        output: PathBuf,

        /// Indent the generated content.xml
        #[arg(short, long)]
        prettify: bool,

        /// Decode fractional numbers as exact decimals
        #[arg(long)]
        floats_as_decimal: bool,
    },

    /// Print the content.xml a document would be encoded to
    Content {
        /// Input ODS file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the generated content.xml
        #[arg(short, long)]
        prettify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            table,
            with_headers,
            floats_as_decimal,
        } => show(&input, table.as_deref(), with_headers, floats_as_decimal),
        Commands::Recode {
            input,
            output,
            prettify,
            floats_as_decimal,
        } => recode(&input, &output, prettify, floats_as_decimal),
        Commands::Content {
            input,
            output,
            prettify,
        } => content(&input, output.as_deref(), prettify),
    }
}

fn read_document(input: &Path, options: &OdsOptions) -> Result<Document> {
    OdsReader::read_file(input, options)
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn show(input: &Path, table: Option<&str>, with_headers: bool, floats_as_decimal: bool) -> Result<()> {
    let options = OdsOptions::new().with_floats_as_bigdecimal(floats_as_decimal);
    let document = read_document(input, &options)?;

    let text = match table {
        Some(name) => {
            let table = document
                .table(name)
                .with_context(|| format!("Table '{}' not found", name))?;
            table.to_pretty_string(with_headers)
        }
        None => document.to_pretty_string(with_headers),
    };

    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}

fn recode(input: &Path, output: &Path, prettify: bool, floats_as_decimal: bool) -> Result<()> {
    let read_options = OdsOptions::new().with_floats_as_bigdecimal(floats_as_decimal);
    let mut document = read_document(input, &read_options)?;

    document.set_path(Some(output));
    document
        .save(&OdsOptions::new().with_prettify(prettify))
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Wrote {} tables to '{}'",
        document.table_count(),
        output.display()
    );

    Ok(())
}

fn content(input: &Path, output: Option<&Path>, prettify: bool) -> Result<()> {
    let document = read_document(input, &OdsOptions::default())?;

    let xml = spreadbase::encode_content_xml(&document, &OdsOptions::new().with_prettify(prettify))
        .context("Failed to encode content.xml")?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &xml)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
    } else {
        io::stdout()
            .write_all(xml.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
