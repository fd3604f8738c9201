//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Row ⇄ Domain Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The items table is FLAT: status discriminant + nullable reservation   │
//! │  and sale columns. The domain type is TAGGED: CommercialState owns     │
//! │  the facts of its variant.                                              │
//! │                                                                         │
//! │  READ:  row → Item        enforces "reserved ⇒ both reservation        │
//! │                           columns present", "sold ⇒ price/date/channel  │
//! │                           present, fees/shipping default to 0".         │
//! │                           Violations surface as DbError::Corrupt.       │
//! │                                                                         │
//! │  WRITE: Item → columns    the variant dictates which columns are set    │
//! │                           and which are NULLed - there is no code path  │
//! │                           that leaves stale sale facts on a stock item. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use flip_core::money::Money;
use flip_core::types::{
    Category, CommercialState, Condition, Item, Reservation, SaleRecord, Status,
};

/// All item columns, in the order every SELECT in this file uses.
const ITEM_COLUMNS: &str = "\
    id, organization_id, brand, model, category, condition, status, \
    purchase_price_cents, purchase_date, purchase_source, \
    reserved_for, reserved_until, \
    sale_price_cents, sale_date, sale_channel, \
    platform_fees_cents, shipping_cost_cents, buyer_name, \
    image_urls, notes, created_at";

// =============================================================================
// Row Type
// =============================================================================

/// Flat database row for an item. Internal to the repository.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: String,
    organization_id: String,
    brand: String,
    model: String,
    category: Category,
    condition: Condition,
    status: Status,
    purchase_price_cents: i64,
    purchase_date: NaiveDate,
    purchase_source: String,
    reserved_for: Option<String>,
    reserved_until: Option<DateTime<Utc>>,
    sale_price_cents: Option<i64>,
    sale_date: Option<NaiveDate>,
    sale_channel: Option<String>,
    platform_fees_cents: Option<i64>,
    shipping_cost_cents: Option<i64>,
    buyer_name: Option<String>,
    image_urls: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl ItemRow {
    /// Converts a flat row into the tagged domain type, enforcing the
    /// status invariant. A row that can't be converted was written by
    /// something other than this crate.
    fn into_item(self) -> DbResult<Item> {
        let state = match self.status {
            Status::InStock => CommercialState::InStock,

            Status::Reserved => match (self.reserved_for, self.reserved_until) {
                (Some(reserved_for), Some(reserved_until)) => {
                    CommercialState::Reserved(Reservation {
                        reserved_for,
                        reserved_until,
                    })
                }
                _ => {
                    return Err(DbError::corrupt(
                        self.id,
                        "status is 'reserved' but reservation columns are NULL",
                    ))
                }
            },

            Status::Sold => match (self.sale_price_cents, self.sale_date, self.sale_channel) {
                (Some(price), Some(sale_date), Some(channel)) => {
                    CommercialState::Sold(SaleRecord {
                        sale_price: Money::from_cents(price),
                        sale_date,
                        channel,
                        // Fees and shipping default to zero when absent
                        platform_fees: Money::from_cents(self.platform_fees_cents.unwrap_or(0)),
                        shipping_cost: Money::from_cents(self.shipping_cost_cents.unwrap_or(0)),
                        buyer: self.buyer_name,
                    })
                }
                _ => {
                    return Err(DbError::corrupt(
                        self.id,
                        "status is 'sold' but sale columns are NULL",
                    ))
                }
            },
        };

        let image_urls: Vec<String> = serde_json::from_str(&self.image_urls)
            .map_err(|e| DbError::corrupt(self.id.clone(), format!("bad image_urls JSON: {e}")))?;

        Ok(Item {
            id: self.id,
            organization_id: self.organization_id,
            brand: self.brand,
            model: self.model,
            category: self.category,
            condition: self.condition,
            state,
            purchase_price: Money::from_cents(self.purchase_price_cents),
            purchase_date: self.purchase_date,
            purchase_source: self.purchase_source,
            image_urls,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

/// The state-dependent column values for a write.
struct StateColumns<'a> {
    status: Status,
    reserved_for: Option<&'a str>,
    reserved_until: Option<DateTime<Utc>>,
    sale_price_cents: Option<i64>,
    sale_date: Option<NaiveDate>,
    sale_channel: Option<&'a str>,
    platform_fees_cents: Option<i64>,
    shipping_cost_cents: Option<i64>,
    buyer_name: Option<&'a str>,
}

impl<'a> StateColumns<'a> {
    fn from_state(state: &'a CommercialState) -> Self {
        let mut cols = StateColumns {
            status: state.status(),
            reserved_for: None,
            reserved_until: None,
            sale_price_cents: None,
            sale_date: None,
            sale_channel: None,
            platform_fees_cents: None,
            shipping_cost_cents: None,
            buyer_name: None,
        };

        match state {
            CommercialState::InStock => {}
            CommercialState::Reserved(resv) => {
                cols.reserved_for = Some(resv.reserved_for.as_str());
                cols.reserved_until = Some(resv.reserved_until);
            }
            CommercialState::Sold(sale) => {
                cols.sale_price_cents = Some(sale.sale_price.cents());
                cols.sale_date = Some(sale.sale_date);
                cols.sale_channel = Some(sale.channel.as_str());
                cols.platform_fees_cents = Some(sale.platform_fees.cents());
                cols.shipping_cost_cents = Some(sale.shipping_cost.cents());
                cols.buyer_name = sale.buyer.as_deref();
            }
        }

        cols
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a complete item.
    pub async fn insert(&self, item: &Item) -> DbResult<()> {
        debug!(item_id = %item.id, brand = %item.brand, "Inserting item");

        let cols = StateColumns::from_state(&item.state);
        let image_urls = serde_json::to_string(&item.image_urls)
            .map_err(|e| DbError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO items (
                id, organization_id, brand, model, category, condition, status,
                purchase_price_cents, purchase_date, purchase_source,
                reserved_for, reserved_until,
                sale_price_cents, sale_date, sale_channel,
                platform_fees_cents, shipping_cost_cents, buyer_name,
                image_urls, notes, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7,
                ?8, ?9, ?10,
                ?11, ?12,
                ?13, ?14, ?15,
                ?16, ?17, ?18,
                ?19, ?20, ?21
            )
            "#,
        )
        .bind(&item.id)
        .bind(&item.organization_id)
        .bind(&item.brand)
        .bind(&item.model)
        .bind(item.category)
        .bind(item.condition)
        .bind(cols.status)
        .bind(item.purchase_price.cents())
        .bind(item.purchase_date)
        .bind(&item.purchase_source)
        .bind(cols.reserved_for)
        .bind(cols.reserved_until)
        .bind(cols.sale_price_cents)
        .bind(cols.sale_date)
        .bind(cols.sale_channel)
        .bind(cols.platform_fees_cents)
        .bind(cols.shipping_cost_cents)
        .bind(cols.buyer_name)
        .bind(image_urls)
        .bind(&item.notes)
        .bind(item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets an item by ID. `Ok(None)` means the item doesn't exist (which
    /// the engine maps to its NotFound).
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ItemRow::into_item).transpose()
    }

    /// Replaces the commercial state of one item, compare-and-set style.
    ///
    /// ## Atomicity
    /// This is the single-row atomic update the lifecycle manager relies
    /// on: status and every state-dependent column change in one statement,
    /// and the statement only matches while the row still carries
    /// `expected`. A concurrent writer that got there first makes this a
    /// no-op `Conflict` instead of silently overwriting its sale facts.
    /// Columns not owned by the new state are set to NULL, so a transition
    /// away from reserved/sold clears those facts in the same write.
    pub async fn update_state(
        &self,
        id: &str,
        expected: Status,
        state: &CommercialState,
    ) -> DbResult<()> {
        debug!(item_id = %id, from = ?expected, to = ?state.status(), "Updating item state");

        let cols = StateColumns::from_state(state);

        let result = sqlx::query(
            r#"
            UPDATE items SET
                status = ?2,
                reserved_for = ?3,
                reserved_until = ?4,
                sale_price_cents = ?5,
                sale_date = ?6,
                sale_channel = ?7,
                platform_fees_cents = ?8,
                shipping_cost_cents = ?9,
                buyer_name = ?10
            WHERE id = ?1 AND status = ?11
            "#,
        )
        .bind(id)
        .bind(cols.status)
        .bind(cols.reserved_for)
        .bind(cols.reserved_until)
        .bind(cols.sale_price_cents)
        .bind(cols.sale_date)
        .bind(cols.sale_channel)
        .bind(cols.platform_fees_cents)
        .bind(cols.shipping_cost_cents)
        .bind(cols.buyer_name)
        .bind(expected)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Zero rows: either the item is gone or its status moved on.
            let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE id = ?1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

            return if exists == 0 {
                Err(DbError::not_found("Item", id))
            } else {
                Err(DbError::Conflict {
                    id: id.to_string(),
                    expected,
                })
            };
        }

        Ok(())
    }

    /// Lists items for an organization, newest first, with an optional
    /// status filter. Returns the page plus the total matching count.
    pub async fn list(
        &self,
        organization_id: &str,
        status: Option<Status>,
        offset: u32,
        limit: u32,
    ) -> DbResult<(Vec<Item>, i64)> {
        let (rows, total) = match status {
            Some(status) => {
                let rows = sqlx::query_as::<_, ItemRow>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items \
                     WHERE organization_id = ?1 AND status = ?2 \
                     ORDER BY created_at DESC LIMIT ?3 OFFSET ?4"
                ))
                .bind(organization_id)
                .bind(status)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM items WHERE organization_id = ?1 AND status = ?2",
                )
                .bind(organization_id)
                .bind(status)
                .fetch_one(&self.pool)
                .await?;

                (rows, total)
            }
            None => {
                let rows = sqlx::query_as::<_, ItemRow>(&format!(
                    "SELECT {ITEM_COLUMNS} FROM items \
                     WHERE organization_id = ?1 \
                     ORDER BY created_at DESC LIMIT ?2 OFFSET ?3"
                ))
                .bind(organization_id)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE organization_id = ?1")
                        .bind(organization_id)
                        .fetch_one(&self.pool)
                        .await?;

                (rows, total)
            }
        };

        debug!(count = rows.len(), total, "Listed items");

        let items = rows
            .into_iter()
            .map(ItemRow::into_item)
            .collect::<DbResult<Vec<_>>>()?;

        Ok((items, total))
    }

    /// Fetches every item of an organization - the stats aggregator's
    /// snapshot read. No pagination: the aggregator needs the full set.
    pub async fn fetch_all(&self, organization_id: &str) -> DbResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE organization_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    /// Deletes an item. An external concern (the engine never deletes),
    /// but lives here so stale-reference behavior is testable.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use flip_core::DEFAULT_ORGANIZATION_ID;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            organization_id: DEFAULT_ORGANIZATION_ID.to_string(),
            brand: "Chanel".to_string(),
            model: "Boy Bag".to_string(),
            category: Category::Bag,
            condition: Condition::VeryGood,
            state: CommercialState::InStock,
            purchase_price: Money::from_cents(90000),
            purchase_date: date(2026, 4, 1),
            purchase_source: "auction".to_string(),
            image_urls: vec!["https://img.example/1.jpg".to_string()],
            notes: Some("gold hardware".to_string()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let db = test_db().await;
        let repo = db.items();

        let item = sample_item("item-1");
        repo.insert(&item).await.unwrap();

        let fetched = repo.get_by_id("item-1").await.unwrap().unwrap();
        assert_eq!(fetched.brand, "Chanel");
        assert_eq!(fetched.status(), Status::InStock);
        assert_eq!(fetched.purchase_price.cents(), 90000);
        assert_eq!(fetched.image_urls, item.image_urls);
        assert_eq!(fetched.purchase_date, item.purchase_date);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;
        assert!(db.items().get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_state_to_reserved_and_back() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert(&sample_item("item-1")).await.unwrap();

        let reserved = CommercialState::Reserved(Reservation {
            reserved_for: "Max".to_string(),
            reserved_until: Utc::now(),
        });
        repo.update_state("item-1", Status::InStock, &reserved)
            .await
            .unwrap();

        let fetched = repo.get_by_id("item-1").await.unwrap().unwrap();
        assert_eq!(fetched.status(), Status::Reserved);
        assert_eq!(fetched.reservation().unwrap().reserved_for, "Max");

        // Back to stock: reservation columns must be cleared by the same write
        repo.update_state("item-1", Status::Reserved, &CommercialState::InStock)
            .await
            .unwrap();
        let fetched = repo.get_by_id("item-1").await.unwrap().unwrap();
        assert_eq!(fetched.status(), Status::InStock);
        assert!(fetched.reservation().is_none());
    }

    #[tokio::test]
    async fn test_update_state_to_sold_roundtrips_sale_facts() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert(&sample_item("item-1")).await.unwrap();

        let sold = CommercialState::Sold(SaleRecord {
            sale_price: Money::from_cents(120000),
            sale_date: date(2026, 8, 15),
            channel: "vestiaire".to_string(),
            platform_fees: Money::from_cents(12000),
            shipping_cost: Money::from_cents(1500),
            buyer: Some("Anna".to_string()),
        });
        repo.update_state("item-1", Status::InStock, &sold)
            .await
            .unwrap();

        let fetched = repo.get_by_id("item-1").await.unwrap().unwrap();
        let sale = fetched.sale().unwrap();
        assert_eq!(sale.sale_price.cents(), 120000);
        assert_eq!(sale.channel, "vestiaire");
        assert_eq!(sale.buyer.as_deref(), Some("Anna"));
    }

    #[tokio::test]
    async fn test_update_state_missing_item_is_not_found() {
        let db = test_db().await;
        let err = db
            .items()
            .update_state("ghost", Status::Reserved, &CommercialState::InStock)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_state_is_compare_and_set() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert(&sample_item("item-1")).await.unwrap();

        let first_sale = CommercialState::Sold(SaleRecord {
            sale_price: Money::from_cents(5000),
            sale_date: date(2026, 8, 10),
            channel: "vinted".to_string(),
            platform_fees: Money::zero(),
            shipping_cost: Money::zero(),
            buyer: None,
        });
        repo.update_state("item-1", Status::InStock, &first_sale)
            .await
            .unwrap();

        // A second writer that still thinks the item is in stock loses
        // the race instead of overwriting the first sale's facts.
        let second_sale = CommercialState::Sold(SaleRecord {
            sale_price: Money::from_cents(9999),
            sale_date: date(2026, 8, 11),
            channel: "ebay".to_string(),
            platform_fees: Money::zero(),
            shipping_cost: Money::zero(),
            buyer: None,
        });
        let err = repo
            .update_state("item-1", Status::InStock, &second_sale)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::Conflict {
                expected: Status::InStock,
                ..
            }
        ));

        let item = repo.get_by_id("item-1").await.unwrap().unwrap();
        assert_eq!(item.sale().unwrap().sale_price.cents(), 5000);
        assert_eq!(item.sale().unwrap().channel, "vinted");
    }

    #[tokio::test]
    async fn test_list_filters_and_paginates() {
        let db = test_db().await;
        let repo = db.items();

        for i in 0..3 {
            let mut item = sample_item(&format!("item-{i}"));
            // Distinct created_at so ordering is deterministic
            item.created_at = Utc::now() + chrono::Duration::seconds(i);
            repo.insert(&item).await.unwrap();
        }
        let sold = CommercialState::Sold(SaleRecord {
            sale_price: Money::from_cents(1000),
            sale_date: date(2026, 8, 1),
            channel: "ebay".to_string(),
            platform_fees: Money::zero(),
            shipping_cost: Money::zero(),
            buyer: None,
        });
        repo.update_state("item-0", Status::InStock, &sold)
            .await
            .unwrap();

        let (all, total) = repo.list(DEFAULT_ORGANIZATION_ID, None, 0, 50).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(all.len(), 3);
        // Newest first
        assert_eq!(all[0].id, "item-2");

        let (in_stock, total) = repo
            .list(DEFAULT_ORGANIZATION_ID, Some(Status::InStock), 0, 50)
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert!(in_stock.iter().all(|i| i.status() == Status::InStock));

        let (page, total) = repo.list(DEFAULT_ORGANIZATION_ID, None, 2, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "item-0");
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert(&sample_item("item-1")).await.unwrap();

        repo.delete("item-1").await.unwrap();
        assert!(repo.get_by_id("item-1").await.unwrap().is_none());

        let err = repo.delete("item-1").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_corrupt_row_is_rejected_on_read() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert(&sample_item("item-1")).await.unwrap();

        // Break the invariant behind the repository's back
        sqlx::query("UPDATE items SET status = 'sold' WHERE id = 'item-1'")
            .execute(db.pool())
            .await
            .unwrap();

        let err = repo.get_by_id("item-1").await.unwrap_err();
        assert!(matches!(err, DbError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_negative_money_rejected_by_check_constraint() {
        let db = test_db().await;
        let repo = db.items();

        let mut item = sample_item("item-1");
        item.purchase_price = Money::from_cents(-1);

        // Validation catches this upstream; the schema is the backstop.
        let err = repo.insert(&item).await.unwrap_err();
        assert!(matches!(err, DbError::CheckViolation { .. }));
    }
}
