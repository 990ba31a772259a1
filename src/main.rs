use std::path::Path;

use clap::Parser;

use cvparse::batch::{self, BatchEntry};
use cvparse::cli::commands::{Cli, Command};
use cvparse::cli::output;
use cvparse::models::MediaType;
use cvparse::parser;

fn main() {
    // Diagnostics go to stderr; stdout carries only JSON results.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    match cli.command {
        Command::Parse { file, media_type } => cmd_parse(&file, media_type.as_deref()),
        Command::Batch { files } => cmd_batch(&files),
        Command::Formats => cmd_formats(),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

/// Declared type for a file: the explicit flag wins, otherwise the
/// extension. An uninferrable extension produces a tag the core will
/// reject as unsupported.
fn declared_media_type(path: &Path, flag: Option<&str>) -> String {
    flag.map(String::from).unwrap_or_else(|| {
        MediaType::from_path(path)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string())
    })
}

fn cmd_parse(file: &Path, media_type: Option<&str>) -> CmdResult {
    let media = declared_media_type(file, media_type);
    let resume = parser::parse_document(file, &media).map_err(map_err)?;
    println!("{}", output::format_json(&resume));
    Ok(())
}

fn cmd_batch(files: &[std::path::PathBuf]) -> CmdResult {
    let entries: Vec<BatchEntry> = files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            BatchEntry::new(path.clone(), name, declared_media_type(path, None))
        })
        .collect();

    let outcomes = batch::parse_batch(&entries);
    println!("{}", output::format_json(&outcomes));
    Ok(())
}

fn cmd_formats() -> CmdResult {
    #[derive(serde::Serialize)]
    struct FormatEntry {
        media_type: &'static str,
        extension: &'static str,
    }

    let formats = [
        FormatEntry {
            media_type: MediaType::Pdf.as_str(),
            extension: "pdf",
        },
        FormatEntry {
            media_type: MediaType::Docx.as_str(),
            extension: "docx",
        },
        FormatEntry {
            media_type: MediaType::Doc.as_str(),
            extension: "doc",
        },
    ];
    println!("{}", output::format_json(&formats));
    Ok(())
}
