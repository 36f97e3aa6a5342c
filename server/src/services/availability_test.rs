use std::sync::Mutex;

use super::*;
use crate::state::AppState;
use crate::state::test_helpers::test_config_with_gateway;

/// Inventory that replays queued results.
struct ScriptedInventory {
    results: Mutex<Vec<Result<Vec<String>, GatewayError>>>,
}

impl ScriptedInventory {
    fn new(mut results: Vec<Result<Vec<String>, GatewayError>>) -> Self {
        results.reverse();
        Self { results: Mutex::new(results) }
    }
}

#[async_trait::async_trait]
impl ServiceInventory for ScriptedInventory {
    async fn service_names(&self) -> Result<Vec<String>, GatewayError> {
        self.results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[tokio::test]
async fn refresh_once_stores_sorted_unique_names() {
    let state = AppState::new(test_config_with_gateway());
    let inventory = ScriptedInventory::new(vec![Ok(vec!["odk".into(), "gather".into(), "odk".into()])]);

    let count = refresh_once(&state, &inventory).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(state.available_services(), Some(vec!["gather".to_owned(), "odk".to_owned()]));
}

#[tokio::test]
async fn refresh_once_failure_keeps_previous_snapshot() {
    let state = AppState::new(test_config_with_gateway());
    let inventory = ScriptedInventory::new(vec![
        Ok(vec!["kernel".into()]),
        Err(GatewayError::Status { status: 502 }),
    ]);

    refresh_once(&state, &inventory).await.unwrap();
    let err = refresh_once(&state, &inventory).await.unwrap_err();
    assert!(matches!(err, GatewayError::Status { status: 502 }));
    assert_eq!(state.available_services(), Some(vec!["kernel".to_owned()]));
}

#[tokio::test]
async fn spawn_refresh_task_runs_first_refresh_immediately() {
    let state = AppState::new(test_config_with_gateway());
    let inventory: Arc<dyn ServiceInventory> = Arc::new(ScriptedInventory::new(vec![Ok(vec!["kibana".into()])]));

    let handle = spawn_refresh_task(state.clone(), inventory, Duration::from_secs(3600));
    for _ in 0..50 {
        if state.available_services() == Some(vec!["kibana".to_owned()]) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.abort();
    assert_eq!(state.available_services(), Some(vec!["kibana".to_owned()]));
}
