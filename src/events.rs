use crate::db::DbPool;
use crate::entities::{notification, work_order, work_request};
use crate::errors::ServiceError;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Domain events emitted by services after their writes commit. Delivery is
/// best-effort; a full channel never fails the originating operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    WorkRequestCreated(i32),
    WorkRequestConverted {
        request_id: i32,
        work_order_id: i32,
    },
    WorkOrderCreated(i32),
    WorkOrderStatusChanged {
        work_order_id: i32,
        old_status: String,
        new_status: String,
    },
    PmWorkOrdersGenerated {
        pm_id: i32,
        count: usize,
    },
    PmTechniciansAssigned {
        pm_id: i32,
        technician_ids: Vec<i32>,
    },
    PmOccurrenceScheduled {
        pm_id: i32,
        work_order_id: i32,
        scheduled_date: NaiveDate,
        occurrence_number: i32,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Creates a connected sender/receiver pair with a bounded queue.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

/// Drains the event queue, logging each event and recording in-app
/// notification rows for the ones a user would care about. Outbound delivery
/// (email, push) is out of scope for this service.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>, db: Option<Arc<DbPool>>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::WorkRequestConverted {
                request_id,
                work_order_id,
            } => {
                info!(
                    request_id,
                    work_order_id, "work request converted to work order"
                );
            }
            Event::PmWorkOrdersGenerated { pm_id, count } => {
                info!(pm_id, count, "preventive maintenance schedule expanded");
            }
            other => {
                info!(event = ?other, "event processed");
            }
        }

        if let Some(db) = &db {
            if let Err(e) = record_notification(db, &event).await {
                warn!(error = %e, "Failed to record notification for event");
            }
        }
    }
    warn!("event channel closed; processor exiting");
}

/// Writes a notification row for events that concern a specific user. Events
/// without an addressable user are logged only.
async fn record_notification(db: &DbPool, event: &Event) -> Result<(), ServiceError> {
    let (user_id, title, message, notification_type, related_id) = match event {
        Event::WorkRequestConverted {
            request_id,
            work_order_id,
        } => {
            let Some(request) = work_request::Entity::find_by_id(*request_id).one(db).await?
            else {
                return Ok(());
            };
            let Some(user_id) = request.requested_by_id else {
                return Ok(());
            };
            (
                user_id,
                "Work request converted".to_string(),
                format!(
                    "Your request {} has been converted to a work order",
                    request.request_number
                ),
                "work_request".to_string(),
                Some(*work_order_id),
            )
        }
        Event::WorkOrderStatusChanged {
            work_order_id,
            new_status,
            ..
        } => {
            let Some(order) = work_order::Entity::find_by_id(*work_order_id).one(db).await?
            else {
                return Ok(());
            };
            let Some(user_id) = order.requested_by_id else {
                return Ok(());
            };
            (
                user_id,
                "Work order status changed".to_string(),
                format!("{} is now {}", order.work_order_number, new_status),
                "work_order".to_string(),
                Some(*work_order_id),
            )
        }
        _ => return Ok(()),
    };

    notification::ActiveModel {
        user_id: Set(user_id),
        title: Set(title),
        message: Set(message),
        notification_type: Set(notification_type),
        related_id: Set(related_id),
        is_read: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_and_receive_round_trip() {
        let (sender, mut rx) = channel(8);
        sender
            .send(Event::WorkRequestConverted {
                request_id: 1,
                work_order_id: 2,
            })
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            Event::WorkRequestConverted {
                request_id,
                work_order_id,
            } => {
                assert_eq!(request_id, 1);
                assert_eq!(work_order_id, 2);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
