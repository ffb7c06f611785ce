use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wellpath",
    version,
    about = "Parse lab reports, normalize intake answers and assemble wellness reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Emit logs as JSON lines on stderr.
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse lab-report text and print the structured document.
    ParseLab {
        #[arg(value_name = "TEXT_FILE")]
        input: PathBuf,
    },

    /// Normalize a questionnaire and print it with derived metrics.
    Intake {
        #[arg(value_name = "JSON_FILE")]
        input: PathBuf,
    },

    /// Build and print the report context for an assembly payload.
    Context {
        #[arg(value_name = "PAYLOAD_JSON")]
        payload: PathBuf,

        /// Copy file (default: <config_dir>/wellpath/copy.json when present).
        #[arg(long, value_name = "FILE")]
        copy: Option<PathBuf>,
    },

    /// Parse lab-report text and draw it onto a one-page PDF summary.
    RenderLab {
        #[arg(value_name = "TEXT_FILE")]
        input: PathBuf,

        #[arg(long, value_name = "PDF")]
        out: PathBuf,
    },

    /// Build the report context and write it as a DOCX document.
    Export {
        #[arg(value_name = "PAYLOAD_JSON")]
        payload: PathBuf,

        #[arg(long, value_name = "DOCX")]
        out: PathBuf,

        #[arg(long, value_name = "FILE")]
        copy: Option<PathBuf>,

        /// Tera template replacing the built-in report layout.
        #[arg(long, value_name = "TERA_FILE")]
        template: Option<PathBuf>,
    },
}
