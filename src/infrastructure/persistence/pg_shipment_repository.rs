//! PostgreSQL implementation of shipment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    NewShipment, NewShipmentEvent, Party, Shipment, ShipmentEvent, StatusCount,
};
use crate::domain::repositories::ShipmentRepository;
use crate::error::AppError;

const SHIPMENT_COLUMNS: &str = r#"
    id, tracking_number,
    sender_name, sender_address, sender_phone, sender_email, sender_country, sender_zip,
    receiver_name, receiver_address, receiver_phone, receiver_email, receiver_country, receiver_zip,
    weight, service_type, status, date_sent, estimated_delivery,
    contents, payment_mode, instructions, created_at
"#;

const EVENT_COLUMNS: &str =
    r#"id, shipment_id, status, location, description, "timestamp", created_at"#;

/// Row of the `shipments` table.
#[derive(Debug, FromRow)]
struct ShipmentRow {
    id: i64,
    tracking_number: String,
    sender_name: String,
    sender_address: String,
    sender_phone: String,
    sender_email: Option<String>,
    sender_country: Option<String>,
    sender_zip: Option<String>,
    receiver_name: String,
    receiver_address: String,
    receiver_phone: String,
    receiver_email: Option<String>,
    receiver_country: Option<String>,
    receiver_zip: Option<String>,
    weight: String,
    service_type: String,
    status: String,
    date_sent: String,
    estimated_delivery: String,
    contents: Option<String>,
    payment_mode: Option<String>,
    instructions: Option<String>,
    created_at: DateTime<Utc>,
}

/// Row of the `shipment_events` table.
#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    shipment_id: i64,
    status: String,
    location: String,
    description: String,
    timestamp: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for ShipmentEvent {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            status: row.status,
            location: row.location,
            description: row.description,
            timestamp: row.timestamp,
            created_at: row.created_at,
        }
    }
}

impl ShipmentRow {
    fn into_shipment(self, events: Vec<ShipmentEvent>) -> Shipment {
        let mut shipment = Shipment {
            id: self.id,
            tracking_number: self.tracking_number,
            sender: Party {
                name: self.sender_name,
                address: self.sender_address,
                phone: self.sender_phone,
                email: self.sender_email,
                country: self.sender_country,
                zip: self.sender_zip,
            },
            receiver: Party {
                name: self.receiver_name,
                address: self.receiver_address,
                phone: self.receiver_phone,
                email: self.receiver_email,
                country: self.receiver_country,
                zip: self.receiver_zip,
            },
            weight: self.weight,
            service_type: self.service_type,
            status: self.status,
            date_sent: self.date_sent,
            estimated_delivery: self.estimated_delivery,
            contents: self.contents,
            payment_mode: self.payment_mode,
            instructions: self.instructions,
            created_at: self.created_at,
            events,
        };
        shipment.sort_events();
        shipment
    }
}

/// PostgreSQL repository for shipments and their events.
///
/// Multi-statement writes run in a single transaction so a shipment never
/// changes without its matching event row.
pub struct PgShipmentRepository {
    pool: Arc<PgPool>,
}

impl PgShipmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn events_for(&self, shipment_id: i64) -> Result<Vec<ShipmentEvent>, AppError> {
        let sql = format!(
            r#"SELECT {EVENT_COLUMNS} FROM shipment_events
               WHERE shipment_id = $1
               ORDER BY "timestamp" DESC, id DESC"#
        );

        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(shipment_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ShipmentEvent::from).collect())
    }

    async fn insert_event(
        tx: &mut Transaction<'_, Postgres>,
        shipment_id: i64,
        event: &NewShipmentEvent,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO shipment_events (shipment_id, status, location, description, "timestamp")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(shipment_id)
        .bind(&event.status)
        .bind(&event.location)
        .bind(&event.description)
        .bind(event.timestamp)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn reload(&self, tracking_number: &str) -> Result<Shipment, AppError> {
        self.find_by_tracking_number(tracking_number)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Failed to fetch shipment after write",
                    json!({ "tracking_number": tracking_number }),
                )
            })
    }
}

#[async_trait]
impl ShipmentRepository for PgShipmentRepository {
    async fn list_all(&self) -> Result<Vec<Shipment>, AppError> {
        let sql = format!("SELECT {SHIPMENT_COLUMNS} FROM shipments ORDER BY created_at DESC, id DESC");
        let shipments = sqlx::query_as::<_, ShipmentRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        if shipments.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            r#"SELECT {EVENT_COLUMNS} FROM shipment_events ORDER BY "timestamp" DESC, id DESC"#
        );
        let events = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        let mut by_shipment: HashMap<i64, Vec<ShipmentEvent>> = HashMap::new();
        for row in events {
            by_shipment
                .entry(row.shipment_id)
                .or_default()
                .push(ShipmentEvent::from(row));
        }

        Ok(shipments
            .into_iter()
            .map(|row| {
                let events = by_shipment.remove(&row.id).unwrap_or_default();
                row.into_shipment(events)
            })
            .collect())
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> Result<Option<Shipment>, AppError> {
        let sql = format!("SELECT {SHIPMENT_COLUMNS} FROM shipments WHERE tracking_number = $1");
        let row = sqlx::query_as::<_, ShipmentRow>(&sql)
            .bind(tracking_number)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let events = self.events_for(row.id).await?;
        Ok(Some(row.into_shipment(events)))
    }

    async fn create(
        &self,
        new_shipment: NewShipment,
        initial_event: NewShipmentEvent,
    ) -> Result<Shipment, AppError> {
        let mut tx = self.pool.begin().await?;

        let shipment_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO shipments (
                tracking_number,
                sender_name, sender_address, sender_phone, sender_email, sender_country, sender_zip,
                receiver_name, receiver_address, receiver_phone, receiver_email, receiver_country, receiver_zip,
                weight, service_type, status, date_sent, estimated_delivery,
                contents, payment_mode, instructions
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING id
            "#,
        )
        .bind(&new_shipment.tracking_number)
        .bind(&new_shipment.sender.name)
        .bind(&new_shipment.sender.address)
        .bind(&new_shipment.sender.phone)
        .bind(&new_shipment.sender.email)
        .bind(&new_shipment.sender.country)
        .bind(&new_shipment.sender.zip)
        .bind(&new_shipment.receiver.name)
        .bind(&new_shipment.receiver.address)
        .bind(&new_shipment.receiver.phone)
        .bind(&new_shipment.receiver.email)
        .bind(&new_shipment.receiver.country)
        .bind(&new_shipment.receiver.zip)
        .bind(&new_shipment.weight)
        .bind(&new_shipment.service_type)
        .bind(&new_shipment.status)
        .bind(&new_shipment.date_sent)
        .bind(&new_shipment.estimated_delivery)
        .bind(&new_shipment.contents)
        .bind(&new_shipment.payment_mode)
        .bind(&new_shipment.instructions)
        .fetch_one(&mut *tx)
        .await
        .inspect_err(|e| {
            tracing::error!(
                error = %e,
                tracking_number = %new_shipment.tracking_number,
                "Failed to insert shipment"
            )
        })?;

        Self::insert_event(&mut tx, shipment_id, &initial_event)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    tracking_number = %new_shipment.tracking_number,
                    "Failed to insert initial event, rolling back shipment"
                )
            })?;

        tx.commit().await?;

        self.reload(&new_shipment.tracking_number).await
    }

    async fn update_status(
        &self,
        tracking_number: &str,
        event: NewShipmentEvent,
    ) -> Result<Option<Shipment>, AppError> {
        let mut tx = self.pool.begin().await?;

        let shipment_id: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM shipments WHERE tracking_number = $1 FOR UPDATE",
        )
        .bind(tracking_number)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(shipment_id) = shipment_id else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("UPDATE shipments SET status = $1 WHERE id = $2")
            .bind(&event.status)
            .bind(shipment_id)
            .execute(&mut *tx)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, tracking_number, "Failed to update shipment status")
            })?;

        Self::insert_event(&mut tx, shipment_id, &event)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, tracking_number, "Failed to append shipment event")
            })?;

        tx.commit().await?;

        self.reload(tracking_number).await.map(Some)
    }

    async fn status_counts(&self) -> Result<Vec<StatusCount>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT status, COUNT(*) AS count
            FROM shipments
            GROUP BY status
            ORDER BY count DESC, status
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
