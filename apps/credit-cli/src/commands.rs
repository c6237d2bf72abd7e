//! Subcommand handlers
//!
//! Every command that changes a table loads the file into a
//! `CreditSession`, applies one edit and writes the file back in the
//! format given by its extension.

use std::io::Write;
use std::path::Path;

use credit_core::{AuthorTable, CreditSession, ImportFormat, NameField, Role};

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

pub type Result<T> = std::result::Result<T, CliError>;

/// Run one subcommand, writing human-readable output to `out`
pub fn run(command: Command, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Roles => list_roles(out),
        Command::Init { authors, output } => {
            let path = output.unwrap_or_else(|| config.output_path(config.output.default_format));
            let mut session = CreditSession::new();
            let table = session.read_list(&authors);
            tracing::info!("Parsed {} authors", table.len());
            save(&session, &path)?;
            writeln!(out, "Wrote {} authors to {}", session.table().len(), path.display())
                .map_err(stdout_error)?;
            report_duplicates(&session, out)
        }
        Command::Show { file } => {
            let session = load(&file)?;
            print_table(session.table(), out)
        }
        Command::AddRow { file } => {
            let mut session = load(&file)?;
            let position = session.add_row();
            save(&session, &file)?;
            writeln!(out, "Added row {}", position).map_err(stdout_error)
        }
        Command::Edit {
            file,
            row,
            field,
            value,
        } => {
            let field = NameField::from(field);
            if field == NameField::Initials && format_of(&file)? == OutputFormat::Xml {
                return Err(CliError::DerivedInitials(file.display().to_string()));
            }
            let mut session = load(&file)?;
            session.set_field(row_index(row)?, field, &value)?;
            save(&session, &file)?;
            writeln!(out, "Row {}: {} = {}", row, field.column(), value).map_err(stdout_error)?;
            report_duplicates(&session, out)
        }
        Command::Assign {
            file,
            row,
            role,
            off,
        } => {
            let mut session = load(&file)?;
            session.toggle_role(row_index(row)?, role, !off)?;
            save(&session, &file)?;
            let verb = if off { "revoked" } else { "granted" };
            writeln!(out, "Row {}: {} {}", row, role, verb).map_err(stdout_error)
        }
        Command::Compose { file } => {
            let session = load(&file)?;
            let statements = session.statements();
            writeln!(out, "{}\n\n{}\n\n{}", statements.by_role, statements.by_name, statements.by_initials)
                .map_err(stdout_error)?;
            report_duplicates(&session, out)
        }
        Command::Convert { file, to, output } => {
            let session = load(&file)?;
            let path = output.unwrap_or_else(|| config.output_path(to));
            if format_of(&path)? != to {
                return Err(CliError::UnsupportedOutput(path.display().to_string()));
            }
            save(&session, &path)?;
            writeln!(out, "Wrote {}", path.display()).map_err(stdout_error)
        }
    }
}

/// 0-based table index of a 1-based position (clap rejects 0)
fn row_index(row: u64) -> Result<usize> {
    usize::try_from(row - 1).map_err(|_| CliError::RowOutOfRange(row))
}

fn load(path: &Path) -> Result<CreditSession> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io {
        action: "read",
        path: path.display().to_string(),
        source,
    })?;
    let mut session = CreditSession::new();
    session.upload(&path.to_string_lossy(), &bytes)?;
    tracing::debug!("Loaded {} rows from {}", session.table().len(), path.display());
    Ok(session)
}

fn format_of(path: &Path) -> Result<OutputFormat> {
    match ImportFormat::from_filename(&path.to_string_lossy()) {
        Some(ImportFormat::Json) => Ok(OutputFormat::Json),
        Some(ImportFormat::JatsXml) => Ok(OutputFormat::Xml),
        None => Err(CliError::UnsupportedOutput(path.display().to_string())),
    }
}

fn save(session: &CreditSession, path: &Path) -> Result<()> {
    let payload = match format_of(path)? {
        OutputFormat::Json => session.export_json()?,
        OutputFormat::Xml => session.export_xml()?,
    };
    std::fs::write(path, &payload.bytes).map_err(|source| CliError::Io {
        action: "write",
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!("Wrote {} bytes ({}) to {}", payload.bytes.len(), payload.media_type, path.display());
    Ok(())
}

fn stdout_error(source: std::io::Error) -> CliError {
    CliError::Io {
        action: "write",
        path: "stdout".to_string(),
        source,
    }
}

fn report_duplicates(session: &CreditSession, out: &mut impl Write) -> Result<()> {
    let duplicates = session.duplicate_initials();
    if duplicates.is_empty() {
        return Ok(());
    }
    tracing::warn!("Duplicate initials: {:?}", duplicates);
    writeln!(out, "\nWarning: duplicate initials {}", duplicates.join(", ")).map_err(stdout_error)
}

fn list_roles(out: &mut impl Write) -> Result<()> {
    for (i, role) in Role::ALL.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} [{}]\n    {}\n    {}",
            i + 1,
            role,
            role.slug(),
            role.term_identifier(),
            role.description()
        )
        .map_err(stdout_error)?;
    }
    Ok(())
}

fn print_table(table: &AuthorTable, out: &mut impl Write) -> Result<()> {
    let widths: Vec<usize> = NameField::ALL
        .iter()
        .map(|field| {
            table
                .rows()
                .iter()
                .map(|row| row.field(*field).chars().count())
                .chain(std::iter::once(field.column().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut header = format!("{:>3}", "#");
    for (field, width) in NameField::ALL.iter().zip(&widths) {
        header.push_str(&format!("  {:<width$}", field.column(), width = *width));
    }
    header.push_str("  Roles");
    writeln!(out, "{}", header.trim_end()).map_err(stdout_error)?;

    for row in table.rows() {
        let mut line = format!("{:>3}", row.position);
        for (field, width) in NameField::ALL.iter().zip(&widths) {
            line.push_str(&format!("  {:<width$}", row.field(*field), width = *width));
        }
        let roles: Vec<&str> = row.roles.active().map(Role::slug).collect();
        line.push_str("  ");
        line.push_str(&roles.join(", "));
        writeln!(out, "{}", line.trim_end()).map_err(stdout_error)?;
    }
    Ok(())
}
