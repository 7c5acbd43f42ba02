use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snaptab")]
#[command(about = "Browse admin service snapshots as sortable tables")]
#[command(version)]
pub struct Cli {
    /// Read the snapshot document from a JSON file
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Fetch the snapshot document from a dashboard base URL
    #[arg(long, global = true, env = "SNAPTAB_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-service summary table
    Summary {
        /// Endpoint path when fetching over HTTP
        #[arg(long, default_value = "/admin/snapshots")]
        endpoint: String,
        /// Disable the use of colors
        #[arg(long)]
        no_color: bool,
    },
    /// Sortable table over one embedded dataset
    Table {
        /// Endpoint path when fetching over HTTP
        #[arg(long, default_value = "/admin/snapshots")]
        endpoint: String,
        /// Identifier of the embedded dataset
        #[arg(long)]
        dataset: String,
        /// Ordered column keys
        #[arg(long, value_delimiter = ',', required = true)]
        columns: Vec<String>,
        /// Rows rendered per draw action
        #[arg(long, default_value = "20")]
        page_size: usize,
        /// Tiebreak column (defaults to the first column)
        #[arg(long)]
        tiebreak: Option<String>,
        /// Initial sort column (defaults to the first column)
        #[arg(long)]
        sort: Option<String>,
        /// Start with the initial sort descending
        #[arg(long)]
        desc: bool,
        /// Log internal table state to stderr
        #[arg(long)]
        debug: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_command() {
        let cli = Cli::parse_from([
            "snaptab",
            "table",
            "--file",
            "snap.json",
            "--dataset",
            "instances",
            "--columns",
            "name,age",
            "--sort",
            "age",
            "--desc",
        ]);
        assert_eq!(cli.file.as_deref(), Some("snap.json"));
        match cli.command {
            Commands::Table {
                dataset,
                columns,
                sort,
                desc,
                page_size,
                ..
            } => {
                assert_eq!(dataset, "instances");
                assert_eq!(columns, vec!["name".to_string(), "age".to_string()]);
                assert_eq!(sort.as_deref(), Some("age"));
                assert!(desc);
                assert_eq!(page_size, 20);
            }
            _ => panic!("expected table command"),
        }
    }

    #[test]
    fn test_parse_summary_command() {
        let cli = Cli::parse_from(["snaptab", "summary", "--url", "http://dash.test"]);
        assert_eq!(cli.url.as_deref(), Some("http://dash.test"));
        assert!(matches!(cli.command, Commands::Summary { .. }));
    }
}
