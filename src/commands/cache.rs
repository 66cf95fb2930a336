use inquire::Confirm;
use tracing::info;

use crate::api::ConfigApi;
use crate::view::tree::confirm_message;

/// Invalidate the server-side cache for `key`, asking first unless `yes`.
pub async fn clear_cache(api: &dyn ConfigApi, key: &str, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let accepted = Confirm::new(&confirm_message(key))
            .with_default(false)
            .prompt()?;
        if !accepted {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let ack = api
        .clear_cache(key)
        .await
        .map_err(|e| anyhow::anyhow!("Error clearing cache: {e}"))?;
    info!(%key, "cache cleared");
    println!("Cleared! {}", ack.0);
    Ok(())
}
