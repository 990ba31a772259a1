use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cvparse",
    version,
    about = "Resume ingestion - extracts text and contact fields from PDF and Word resumes",
    after_help = "NOTE: the declared media type is trusted as-is; files are never sniffed. \
                  When --media-type is omitted it is inferred from the file extension \
                  (.pdf, .docx, .doc)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a single resume and print the extracted fields as JSON.
    ///
    /// Fails with "unsupported media type" for unrecognized formats and
    /// with "could not read document" for corrupt or unreadable files.
    /// A readable document with no recognizable fields still succeeds;
    /// the missing fields are null.
    Parse {
        /// Path to the resume file
        file: PathBuf,
        /// Declared MIME type (default: inferred from the extension)
        #[arg(short, long)]
        media_type: Option<String>,
    },

    /// Parse many resumes, printing one outcome per input file.
    ///
    /// Files are processed independently: a corrupt or unsupported file
    /// yields a failed outcome in its position and the rest of the batch
    /// proceeds. Output order always matches input order, and the exit
    /// code is 0 whenever the batch itself ran.
    Batch {
        /// Paths to the resume files (media types inferred per file)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the recognized media types and their file extensions.
    Formats,
}
