use std::path::Path;

use crate::api::SnapshotClient;
use crate::cli::interactive;
use crate::cli::main_types::{Cli, Commands};
use crate::display::{BufferView, SummaryDisplay};
use crate::error::{AppError, CliError};
use crate::snapshot::SnapshotDocument;
use crate::table::{SortableTable, TableConfig};

pub struct Dispatcher;

impl Dispatcher {
    pub async fn dispatch(cli: Cli) -> Result<(), AppError> {
        match cli.command {
            Commands::Summary { endpoint, no_color } => {
                let doc =
                    Self::load_document(cli.file.as_deref(), cli.url.as_deref(), &endpoint).await?;
                let use_colors = !no_color && atty::is(atty::Stream::Stdout);
                let display = SummaryDisplay::new().with_colors(use_colors);
                println!("{}", display.render_service_list(&doc.service_summaries()));
                Ok(())
            }
            Commands::Table {
                endpoint,
                dataset,
                columns,
                page_size,
                tiebreak,
                sort,
                desc,
                debug,
            } => {
                let mut doc =
                    Self::load_document(cli.file.as_deref(), cli.url.as_deref(), &endpoint).await?;
                let records = doc.take_records(&dataset)?;

                if columns.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "--columns requires at least one column key".to_string(),
                    )
                    .into());
                }

                let mut config = TableConfig::new(columns, dataset)
                    .with_page_size(page_size)
                    .with_debug(debug);
                if let Some(key) = tiebreak {
                    config = config.with_tiebreak_key(key);
                }
                let sort_key = sort.unwrap_or_else(|| config.columns[0].clone());
                config = config.with_initial_sort(sort_key, !desc);

                if atty::is(atty::Stream::Stdout) {
                    interactive::run(config, records)
                } else {
                    // Piped output: assemble the whole table and print once
                    let mut table = SortableTable::new(config, records, BufferView::new())?;
                    let total = table.row_count();
                    table.draw_more(total);
                    print!("{}", table.into_view().render());
                    Ok(())
                }
            }
        }
    }

    async fn load_document(
        file: Option<&str>,
        url: Option<&str>,
        endpoint: &str,
    ) -> Result<SnapshotDocument, AppError> {
        if let Some(path) = file {
            SnapshotDocument::from_file(Path::new(path))
        } else if let Some(base) = url {
            let client = SnapshotClient::new(base.to_string())?;
            let value = client.get_json(endpoint).await?;
            SnapshotDocument::from_value(value)
        } else {
            Err(CliError::NoSource.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    #[tokio::test]
    async fn test_load_document_requires_a_source() {
        let err = Dispatcher::load_document(None, None, "/admin/snapshots")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Cli(CliError::NoSource)));
    }

    #[tokio::test]
    async fn test_load_document_missing_file() {
        let err = Dispatcher::load_document(Some("/no/such/snapshot.json"), None, "/x")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::FileRead { .. })));
    }
}
