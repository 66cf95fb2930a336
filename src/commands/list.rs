use prettytable::{row, Table};

use crate::api::ConfigApi;
use crate::models::{value_preview, ConfigEntry};
use crate::store::StateStore;
use crate::util::format_local_time;
use crate::view::tree::EMPTY_NOTICE;

const VALUE_WIDTH: usize = 60;

pub fn build_table(entries: &[ConfigEntry]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Key", "Value", "Description", "Last Updated"]);
    for e in entries {
        table.add_row(row![
            e.key,
            value_preview(&e.value, VALUE_WIDTH),
            e.description_text(),
            format_local_time(e.updated_at.as_ref())
        ]);
    }
    table
}

/// Print every config as a table. A failed load is an error.
pub async fn list_configs(api: &dyn ConfigApi) -> anyhow::Result<()> {
    let mut store = StateStore::new();
    store.reload(api).await;
    if let Some(err) = store.load_error() {
        anyhow::bail!("{err}");
    }

    if store.entries().is_empty() {
        println!("{EMPTY_NOTICE}");
        return Ok(());
    }
    println!("Existing Configurations ({})", store.entries().len());
    build_table(store.entries()).printstd();
    Ok(())
}
