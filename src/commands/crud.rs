use inquire::validator::Validation;
use inquire::{Select, Text};
use tracing::info;

use crate::api::ConfigApi;
use crate::store::StateStore;
use crate::view::tree::VALUE_HINT;

fn required(input: &str) -> Result<Validation, inquire::CustomUserError> {
    if input.is_empty() {
        Ok(Validation::Invalid("Please fill out this field.".into()))
    } else {
        Ok(Validation::Valid)
    }
}

/// Prompt for a new config and write it.
pub async fn create(api: &dyn ConfigApi) -> anyhow::Result<()> {
    let key = Text::new("Key:").with_validator(required).prompt()?;
    let value = Text::new("Value:")
        .with_help_message(VALUE_HINT)
        .with_validator(required)
        .prompt()?;
    let description = Text::new("Description (optional):").prompt()?;

    let saved = api
        .write_entry(&key, &value, &description)
        .await
        .map_err(|e| anyhow::anyhow!("Error saving config: {e}"))?;
    info!(key = %saved.key, "config created");
    println!("Saved '{}' = {}", saved.key, saved.value);
    Ok(())
}

/// Edit value and description of an existing key, picked from a list when
/// none is given.
pub async fn edit(api: &dyn ConfigApi, key: Option<String>) -> anyhow::Result<()> {
    let mut store = StateStore::new();
    store.reload(api).await;
    if let Some(err) = store.load_error() {
        anyhow::bail!("{err}");
    }

    let key = match key {
        Some(k) => k,
        None => {
            let choices: Vec<String> = store.entries().iter().map(|e| e.key.clone()).collect();
            if choices.is_empty() {
                println!("No configurations found.");
                return Ok(());
            }
            Select::new("Choose config to edit:", choices).prompt()?
        }
    };
    let Some(entry) = store.get(&key) else {
        anyhow::bail!("Config '{key}' not found.");
    };

    let value = Text::new("New Value:")
        .with_initial_value(&entry.value.to_string())
        .with_help_message(VALUE_HINT)
        .with_validator(required)
        .prompt()?;
    let description = Text::new("Description:")
        .with_initial_value(entry.description_text())
        .prompt()?;

    let saved = api
        .write_entry(&key, &value, &description)
        .await
        .map_err(|e| anyhow::anyhow!("Error saving config: {e}"))?;
    info!(key = %saved.key, "config updated");
    println!("Saved '{}' = {}", saved.key, saved.value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(required(""), Ok(Validation::Invalid(_))));
        assert!(matches!(required(" "), Ok(Validation::Valid)));
        assert!(matches!(required("120"), Ok(Validation::Valid)));
    }
}
