use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for exemptlog
#[derive(Parser)]
#[command(
    name = "exemptlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect lecture exemption requests and render them into daily spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the lists directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Run the HTTP server (form + POST /submit)
    Serve {
        #[arg(long, help = "Port to listen on (overrides config)")]
        port: Option<u16>,

        #[arg(long, help = "Address to bind (overrides config)")]
        bind: Option<String>,
    },

    /// Show the flattened exemption table for a day
    List {
        #[arg(long, short, value_name = "DD-MM-YYYY", help = "Day to show (default: today)")]
        date: Option<String>,
    },

    /// Export a day's exemption table to a file
    Export {
        #[arg(long, short, value_name = "DD-MM-YYYY", help = "Day to export (default: today)")]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Rebuild the daily spreadsheet from the daily log
    Regen {
        #[arg(long, short, value_name = "DD-MM-YYYY", help = "Day to rebuild (default: today)")]
        date: Option<String>,
    },

    /// Inspect the member roster
    Roster {
        #[arg(long, value_name = "APP_ID", help = "Resolve one application ID")]
        lookup: Option<String>,
    },
}
