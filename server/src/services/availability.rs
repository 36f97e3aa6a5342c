//! Availability refresh: keeps the gateway service snapshot current.
//!
//! DESIGN
//! ======
//! A background task polls the gateway inventory on a fixed interval and
//! swaps the snapshot in `AppState`. Pages always render from the last good
//! snapshot; they never wait on the gateway.
//!
//! ERROR HANDLING
//! ==============
//! A failed poll is logged and leaves the previous snapshot in place.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::gateway::{GatewayError, ServiceInventory};
use crate::state::AppState;

/// Fetch the inventory once and store it. Returns the number of names stored.
///
/// # Errors
///
/// Returns the inventory error; the stored snapshot is left unchanged.
pub async fn refresh_once(state: &AppState, inventory: &dyn ServiceInventory) -> Result<usize, GatewayError> {
    let mut names = inventory.service_names().await?;
    names.sort();
    names.dedup();
    let count = names.len();
    state.set_available_services(names);
    Ok(count)
}

/// Spawn the periodic refresh task. Returns a handle for shutdown.
///
/// The first refresh runs immediately.
pub fn spawn_refresh_task(state: AppState, inventory: Arc<dyn ServiceInventory>, period: Duration) -> JoinHandle<()> {
    info!(period_secs = period.as_secs(), "gateway availability refresh configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match refresh_once(&state, inventory.as_ref()).await {
                Ok(count) => info!(services = count, "gateway availability refreshed"),
                Err(e) => warn!(error = %e, "gateway availability refresh failed; keeping previous snapshot"),
            }
        }
    })
}

#[cfg(test)]
#[path = "availability_test.rs"]
mod tests;
