//! In-memory notification dispatcher.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use uuid::Uuid;

use super::{Channel, NotificationRequest};
use crate::error::{EngineError, EngineResult};

/// A notification that was actually delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Unique delivery identifier.
    pub id: Uuid,
    /// The request that was delivered.
    pub request: NotificationRequest,
    /// The channels delivery actually happened on, after muting.
    pub delivered_channels: Vec<Channel>,
}

/// Dispatcher that records deliveries in memory.
///
/// Staff members can mute individual channels; a request whose channels
/// are all muted is suppressed rather than delivered, and `send`
/// reports that with `Ok(false)`.
#[derive(Debug, Default)]
pub struct InAppDispatcher {
    deliveries: Mutex<Vec<Delivery>>,
    muted: Mutex<HashMap<String, HashSet<Channel>>>,
}

impl InAppDispatcher {
    /// Creates an empty dispatcher with no muted channels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutes a channel for a staff member.
    pub fn mute_channel(&self, staff_id: &str, channel: Channel) -> EngineResult<()> {
        let mut muted = self.lock_muted()?;
        muted.entry(staff_id.to_string()).or_default().insert(channel);
        Ok(())
    }

    /// Returns every delivery recorded so far.
    pub fn deliveries(&self) -> EngineResult<Vec<Delivery>> {
        Ok(self.lock_deliveries()?.clone())
    }

    /// Returns the deliveries recorded for a single staff member.
    pub fn deliveries_for(&self, staff_id: &str) -> EngineResult<Vec<Delivery>> {
        let deliveries = self.lock_deliveries()?;
        Ok(deliveries
            .iter()
            .filter(|d| d.request.recipient_staff_id == staff_id)
            .cloned()
            .collect())
    }

    fn lock_deliveries(&self) -> EngineResult<std::sync::MutexGuard<'_, Vec<Delivery>>> {
        self.deliveries.lock().map_err(|_| EngineError::DispatchFailed {
            message: "delivery log lock poisoned".to_string(),
        })
    }

    fn lock_muted(
        &self,
    ) -> EngineResult<std::sync::MutexGuard<'_, HashMap<String, HashSet<Channel>>>> {
        self.muted.lock().map_err(|_| EngineError::DispatchFailed {
            message: "mute table lock poisoned".to_string(),
        })
    }
}

impl super::NotificationDispatcher for InAppDispatcher {
    async fn send(&self, request: &NotificationRequest) -> EngineResult<bool> {
        let delivered_channels: Vec<Channel> = {
            let muted = self.lock_muted()?;
            match muted.get(&request.recipient_staff_id) {
                Some(silenced) => request
                    .channels
                    .iter()
                    .copied()
                    .filter(|c| !silenced.contains(c))
                    .collect(),
                None => request.channels.clone(),
            }
        };

        if delivered_channels.is_empty() {
            return Ok(false);
        }

        let delivery = Delivery {
            id: Uuid::new_v4(),
            request: request.clone(),
            delivered_channels,
        };
        self.lock_deliveries()?.push(delivery);
        Ok(true)
    }
}
