use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::controller::{Completion, Effect};
use crate::api::ConfigApi;

/// Run each effect on its own task; results come back on `tx` in whatever
/// order they finish.
pub fn spawn_effects(
    effects: Vec<Effect>,
    api: &Arc<dyn ConfigApi>,
    tx: &UnboundedSender<Completion>,
) {
    for effect in effects {
        let api = Arc::clone(api);
        let tx = tx.clone();
        tokio::spawn(async move {
            let completion = run_effect(effect, api.as_ref()).await;
            // Receiver gone means the UI already quit.
            if tx.send(completion).is_err() {
                debug!("completion dropped, ui closed");
            }
        });
    }
}

pub async fn run_effect(effect: Effect, api: &dyn ConfigApi) -> Completion {
    match effect {
        Effect::Load => Completion::Loaded(api.list_entries().await),
        Effect::Write {
            control,
            key,
            raw_value,
            description,
        } => Completion::Written {
            result: api.write_entry(&key, &raw_value, &description).await,
            control,
        },
        Effect::ClearCache { key } => Completion::CacheCleared {
            result: api.clear_cache(&key).await,
            key,
        },
        Effect::RevertAfter {
            control,
            token,
            delay,
        } => {
            tokio::time::sleep(delay).await;
            Completion::RevertDue { control, token }
        }
    }
}
