//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use credit_core::{NameField, Role};

use crate::config::OutputFormat;

/// credit - CRediT contributor-role statements from an author list
#[derive(Parser, Debug)]
#[command(name = "credit")]
#[command(version)]
#[command(about = "Generate CRediT contribution statements and JATS/JSON role files", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/credit-generator/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the 14 CRediT roles with slugs and descriptions
    Roles,

    /// Parse a comma-separated author list into a new role table
    Init {
        /// Authors, e.g. "Jan Novak1*, Eva Hola2"
        authors: String,

        /// Output file (.json or .xml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the role table
    Show { file: PathBuf },

    /// Append an empty author row
    AddRow { file: PathBuf },

    /// Change one name cell
    Edit {
        file: PathBuf,

        /// Author position (1-based)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        row: u64,

        #[arg(long, value_enum)]
        field: FieldArg,

        #[arg(long)]
        value: String,
    },

    /// Grant or revoke a role for one author
    Assign {
        file: PathBuf,

        /// Author position (1-based)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        row: u64,

        /// Role slug or display name, e.g. "writing-review-editing"
        #[arg(long, value_parser = parse_role)]
        role: Role,

        /// Revoke instead of grant
        #[arg(long)]
        off: bool,
    },

    /// Print the three CRediT paragraphs
    Compose { file: PathBuf },

    /// Convert between JSON and JATS XML
    Convert {
        file: PathBuf,

        #[arg(long, value_enum)]
        to: OutputFormat,

        /// Output file (default: configured output path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Editable name column
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    FirstName,
    MiddleName,
    LastName,
    Initials,
}

impl From<FieldArg> for NameField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::FirstName => NameField::FirstName,
            FieldArg::MiddleName => NameField::MiddleName,
            FieldArg::LastName => NameField::LastName,
            FieldArg::Initials => NameField::Initials,
        }
    }
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::from_slug(value)
        .or_else(|| Role::from_display_name(value))
        .ok_or_else(|| format!("unknown role '{}', run `credit roles` for the list", value))
}
