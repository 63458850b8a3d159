use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wakey")]
#[command(about = "Markdown notes as flat files, served over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the entry files
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API and web pages (the default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List entry titles
    #[command(alias = "ls")]
    List,

    /// Print an entry
    #[command(alias = "v")]
    Show {
        /// Title of the entry (any case)
        title: String,

        /// Print the rendered HTML instead of the markdown
        #[arg(long)]
        html: bool,
    },

    /// Create or replace an entry
    #[command(alias = "w")]
    Write {
        /// Title of the entry
        title: String,

        /// Markdown contents (read from stdin when omitted)
        contents: Option<String>,
    },
}
