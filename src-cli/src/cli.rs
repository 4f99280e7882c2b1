//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jobweek::{LineItem, Schema};

#[derive(Debug, Parser)]
#[command(name = "jobweek", version, about = "Job line items with ISO week windows")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (JSON)
    #[arg(long, global = true, env = "JOBWEEK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store file, overrides the config
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Plate table, overrides the config
    #[arg(long, global = true)]
    pub plates: Option<PathBuf>,

    /// Record layout: basic (7 fields) or plated (9 fields)
    #[arg(long, global = true)]
    pub schema: Option<Schema>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all stored records
    List(ListArgs),
    /// Validate a submission and store every job × item record
    Add(FormArgs),
    /// Show what `add` would store without saving
    Preview(FormArgs),
    /// Replace one record with the first job and item given (plated schema)
    Update(UpdateArgs),
    /// Remove one record
    Delete(DeleteArgs),
    /// Print the current ISO week, or check a yyyyww value
    Week(WeekArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Order by end week; numbering still follows the file
    #[arg(long)]
    pub sort_end_week: bool,
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// Job number, repeatable
    #[arg(long = "job")]
    pub jobs: Vec<String>,

    #[arg(long, default_value = "")]
    pub drawing: String,

    #[arg(long, default_value = "")]
    pub rev: String,

    /// NUMBER:DESCRIPTION[:PART[:PLATE]], repeatable
    #[arg(long = "item", value_parser = parse_item)]
    pub items: Vec<LineItem>,

    /// Start week, yyyyww
    #[arg(long, default_value = "")]
    pub start: String,

    /// End week, yyyyww
    #[arg(long, default_value = "")]
    pub end: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// 1-based record number as shown by `list`
    pub position: String,

    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// 1-based record number as shown by `list`
    pub position: String,
}

#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Week to check instead of printing the current one
    pub week: Option<String>,
}

fn parse_item(value: &str) -> Result<LineItem, String> {
    let mut parts = value.splitn(4, ':');
    let number = parts.next().unwrap_or_default();
    let description = parts
        .next()
        .ok_or_else(|| format!("expected NUMBER:DESCRIPTION, got '{}'", value))?;

    let mut item = LineItem::new(number, description);
    if let Some(part) = parts.next() {
        item = item.with_part(part);
    }
    if let Some(plate) = parts.next() {
        item = item.with_plate(plate);
    }
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_item() {
        let item = parse_item("10:Bracket").unwrap();
        assert_eq!(item, LineItem::new("10", "Bracket"));

        let item = parse_item("10:Bracket:P-1").unwrap();
        assert_eq!(item.part_number, "P-1");
        assert_eq!(item.plate, None);

        let item = parse_item("10:Bracket:P-1:ZN").unwrap();
        assert_eq!(item.plate.as_deref(), Some("ZN"));

        assert!(parse_item("10").is_err());
    }

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from([
            "jobweek", "add", "--job", "J1", "--job", "J2", "--drawing", "D-1", "--rev", "A",
            "--item", "1:one", "--start", "202401", "--end", "202402",
        ])
        .unwrap();

        match cli.command {
            Command::Add(form) => {
                assert_eq!(form.jobs, vec!["J1", "J2"]);
                assert_eq!(form.items.len(), 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_schema_flag() {
        let cli = Cli::try_parse_from(["jobweek", "--schema", "plated", "list"]).unwrap();
        assert_eq!(cli.global.schema, Some(Schema::Plated));
    }
}
