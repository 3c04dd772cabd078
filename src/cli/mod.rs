use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::session::Role;

#[derive(Parser, Debug)]
#[command(name = "mentorflow", about = "Student work submission and feedback review TUI")]
pub struct Cli {
    /// Skip the login screen and start with the demo identity for the
    /// given role.
    #[arg(long, value_enum)]
    pub demo: Option<DemoRole>,

    /// Directory exported reports are written to (defaults to the
    /// current directory).
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the demo analysis report as a plain-text file and exit.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output directory for the report file.
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DemoRole {
    Student,
    Mentor,
}

impl From<DemoRole> for Role {
    fn from(role: DemoRole) -> Role {
        match role {
            DemoRole::Student => Role::Student,
            DemoRole::Mentor => Role::Mentor,
        }
    }
}

/// Parse CLI arguments.
pub fn parse_args() -> Cli {
    Cli::parse()
}
