//! # Engine Service
//!
//! The orchestration layer of Flip POS: it owns the clock and ID generation,
//! calls the pure functions in flip-core, and persists the results through
//! the item repository.
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  flip-core decides  │  the engine (this module) does                    │
//! │  ──────────────────  │  ─────────────────────────────                   │
//! │  is this transition  │  fetch the item, stamp "now", write the new      │
//! │  legal? what state   │  state back, map storage errors                  │
//! │  results?            │                                                  │
//! │                      │                                                  │
//! │  how does €100 split │  apply the allocation item by item, record       │
//! │  over 3 items?       │  per-item outcomes, keep going past failures     │
//! │                      │                                                  │
//! │  what do the stats   │  fetch the full item set, anchor the window at   │
//! │  say about this set? │  today's date                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settlement Is Not Atomic
//! `settle()` applies per-item sales sequentially without a wrapping
//! transaction. A mid-bundle failure leaves earlier items sold and later
//! ones untouched; the [`SettlementOutcome`] names exactly which is which
//! so the operator can retry the failures as single sales. Input errors
//! (empty bundle, negative amounts) are rejected before ANY item is
//! touched, so they never produce a partial state. Two bundles racing for
//! the same item are resolved by the repository's compare-and-set: the
//! loser records a per-item failure instead of overwriting the winner's
//! sale facts.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use flip_core::error::CoreError;
use flip_core::settlement::{self, AggregateSale, Allocation};
use flip_core::stats::{self, StatsSnapshot};
use flip_core::types::{CommercialState, Item, NewItem, SaleRecord, Status, Timeframe};
use flip_core::{lifecycle, validation, LIST_PAGE_SIZE};

use crate::error::DbError;
use crate::repository::item::ItemRepository;

// =============================================================================
// Error Type
// =============================================================================

/// Errors surfaced by engine operations.
///
/// The categories callers need to distinguish:
/// - `NotFound` - stale reference, refresh the list
/// - `Conflict` - a concurrent writer got there first; re-read and retry
/// - `Core` - the domain said no (invalid input or illegal transition)
/// - `Storage` - the database failed; the operation may be retried by the
///   caller once the cause is resolved
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item {0} was modified concurrently")]
    Conflict(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(DbError),
}

impl From<DbError> for EngineError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { id, .. } => EngineError::NotFound(id),
            DbError::Conflict { id, .. } => EngineError::Conflict(id),
            other => EngineError::Storage(other),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Request / Outcome Types
// =============================================================================

/// A lifecycle action requested against one item.
///
/// Serializes tagged so an API layer can pass actions through as JSON:
/// `{"action":"reserve","reserved_for":"Max","duration_days":7}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TransitionAction {
    /// Hold the item for a named customer for `duration_days` days.
    Reserve {
        reserved_for: String,
        duration_days: i64,
    },
    /// Release a hold.
    CancelReservation,
    /// Record a single-item sale.
    Sell(SaleRecord),
    /// Undo a sale, returning the item to stock.
    CancelSale,
}

impl TransitionAction {
    fn name(&self) -> &'static str {
        match self {
            TransitionAction::Reserve { .. } => "reserve",
            TransitionAction::CancelReservation => "cancel_reservation",
            TransitionAction::Sell(_) => "sell",
            TransitionAction::CancelSale => "cancel_sale",
        }
    }
}

/// One item successfully settled as part of a bundle.
#[derive(Debug, Clone, Serialize)]
pub struct SettledItem {
    pub item_id: String,
    /// The monetary share this item received.
    pub allocation: Allocation,
    /// The item as persisted, now sold.
    pub item: Item,
}

/// One item that could not be settled.
#[derive(Debug)]
pub struct SettlementFailure {
    pub item_id: String,
    pub error: EngineError,
}

/// What happened to a bundle settlement, item by item.
#[derive(Debug)]
pub enum SettlementOutcome {
    /// Every item was settled.
    Completed { settled: Vec<SettledItem> },
    /// Some items were settled, some were not. The settled ones STAY sold;
    /// the failed ones are untouched and can be retried individually.
    Partial {
        settled: Vec<SettledItem>,
        failed: Vec<SettlementFailure>,
    },
    /// No item was settled.
    Failed { failed: Vec<SettlementFailure> },
}

impl SettlementOutcome {
    fn from_results(settled: Vec<SettledItem>, failed: Vec<SettlementFailure>) -> Self {
        match (settled.is_empty(), failed.is_empty()) {
            (false, true) => SettlementOutcome::Completed { settled },
            (true, false) => SettlementOutcome::Failed { failed },
            _ => SettlementOutcome::Partial { settled, failed },
        }
    }
}

/// One page of the inventory list.
#[derive(Debug, Serialize)]
pub struct ItemPage {
    pub items: Vec<Item>,
    /// Total matching items across all pages.
    pub total: i64,
    pub page: u32,
}

// =============================================================================
// Engine
// =============================================================================

/// The settlement & analytics engine.
///
/// Cheap to clone; holds a repository (which holds a pooled connection).
#[derive(Debug, Clone)]
pub struct Engine {
    items: ItemRepository,
    organization_id: String,
}

impl Engine {
    /// Creates an engine scoped to the default organization.
    pub fn new(items: ItemRepository) -> Self {
        Engine::for_organization(items, flip_core::DEFAULT_ORGANIZATION_ID)
    }

    /// Creates an engine scoped to a specific organization.
    pub fn for_organization(items: ItemRepository, organization_id: impl Into<String>) -> Self {
        Engine {
            items,
            organization_id: organization_id.into(),
        }
    }

    // =========================================================================
    // Item CRUD
    // =========================================================================

    /// Records a newly purchased item. The item always starts in stock.
    pub async fn create_item(&self, new: NewItem) -> EngineResult<Item> {
        validation::validate_new_item(&new).map_err(CoreError::from)?;

        let item = Item {
            id: Uuid::new_v4().to_string(),
            organization_id: self.organization_id.clone(),
            brand: new.brand.trim().to_string(),
            model: new.model.trim().to_string(),
            category: new.category,
            condition: new.condition,
            state: CommercialState::InStock,
            purchase_price: new.purchase_price,
            purchase_date: new.purchase_date,
            purchase_source: new.purchase_source,
            image_urls: new.image_urls,
            notes: new.notes,
            created_at: Utc::now(),
        };

        self.items.insert(&item).await?;

        info!(item_id = %item.id, brand = %item.brand, "Item created");
        Ok(item)
    }

    /// Fetches one item.
    pub async fn get_item(&self, id: &str) -> EngineResult<Item> {
        self.items
            .get_by_id(id)
            .await?
            .ok_or_else(|| EngineError::NotFound(id.to_string()))
    }

    /// Lists one page of inventory, newest first, optionally filtered by
    /// status. Page size is fixed at [`LIST_PAGE_SIZE`].
    pub async fn list_items(&self, status: Option<Status>, page: u32) -> EngineResult<ItemPage> {
        let offset = page * LIST_PAGE_SIZE;
        let (items, total) = self
            .items
            .list(&self.organization_id, status, offset, LIST_PAGE_SIZE)
            .await?;

        Ok(ItemPage { items, total, page })
    }

    /// Deletes an item outright. Not a lifecycle transition: the row and
    /// its history are gone, and the item stops contributing to stats.
    pub async fn delete_item(&self, id: &str) -> EngineResult<()> {
        self.items.delete(id).await?;
        info!(item_id = %id, "Item deleted");
        Ok(())
    }

    // =========================================================================
    // Lifecycle Transitions
    // =========================================================================

    /// Applies one lifecycle transition to one item.
    ///
    /// Read-decide-write: fetch the current item, let the pure lifecycle
    /// function decide, persist the resulting state in a single-row
    /// compare-and-set keyed on the status that was read. An illegal
    /// transition changes nothing; a concurrent writer between the read
    /// and the write surfaces as [`EngineError::Conflict`] instead of
    /// being overwritten.
    pub async fn transition(&self, id: &str, action: TransitionAction) -> EngineResult<Item> {
        let item = self.get_item(id).await?;
        let read_status = item.status();

        debug!(
            item_id = %id,
            from = ?read_status,
            action = action.name(),
            "Applying transition"
        );

        let updated = match action {
            TransitionAction::Reserve {
                reserved_for,
                duration_days,
            } => lifecycle::reserve(item, &reserved_for, duration_days, Utc::now())?,
            TransitionAction::CancelReservation => lifecycle::cancel_reservation(item)?,
            TransitionAction::Sell(sale) => lifecycle::sell(item, sale)?,
            TransitionAction::CancelSale => lifecycle::cancel_sale(item)?,
        };

        self.items
            .update_state(id, read_status, &updated.state)
            .await?;

        info!(item_id = %id, to = ?updated.status(), "Transition applied");
        Ok(updated)
    }

    // =========================================================================
    // Bundle Settlement
    // =========================================================================

    /// Settles an aggregate sale across the given items, in the given order.
    ///
    /// The first item in `item_ids` absorbs the remainder cents. Input
    /// errors (empty bundle, negative amounts, blank channel) fail the whole
    /// call before any item is touched. Per-item failures (missing item,
    /// already sold, storage error) do NOT stop the loop: every remaining
    /// item is still attempted and the outcome reports both lists.
    pub async fn settle(
        &self,
        item_ids: &[String],
        aggregate: AggregateSale,
    ) -> EngineResult<SettlementOutcome> {
        // Allocation validates the aggregate, so a bad input is rejected
        // here while zero items have been mutated.
        let allocations = settlement::allocate(&aggregate, item_ids.len())?;

        info!(
            bundle_size = item_ids.len(),
            sale_price = %aggregate.sale_price,
            channel = %aggregate.channel,
            "Settling bundle"
        );

        let mut settled = Vec::new();
        let mut failed = Vec::new();

        for (item_id, allocation) in item_ids.iter().zip(allocations) {
            let sale = allocation.to_sale_record(&aggregate);

            match self.settle_one(item_id, sale).await {
                Ok(item) => settled.push(SettledItem {
                    item_id: item_id.clone(),
                    allocation,
                    item,
                }),
                Err(error) => {
                    warn!(item_id = %item_id, %error, "Bundle item failed to settle");
                    failed.push(SettlementFailure {
                        item_id: item_id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            settled = settled.len(),
            failed = failed.len(),
            "Bundle settlement finished"
        );

        Ok(SettlementOutcome::from_results(settled, failed))
    }

    async fn settle_one(&self, item_id: &str, sale: SaleRecord) -> EngineResult<Item> {
        let item = self.get_item(item_id).await?;
        let read_status = item.status();
        let updated = lifecycle::sell(item, sale)?;
        self.items
            .update_state(item_id, read_status, &updated.state)
            .await?;
        Ok(updated)
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Computes the dashboard snapshot for a timeframe, anchored at today.
    ///
    /// Reads the organization's full item set in one query; the aggregation
    /// itself is pure and happens in memory.
    pub async fn stats(&self, timeframe: Timeframe) -> EngineResult<StatsSnapshot> {
        let items = self.items.fetch_all(&self.organization_id).await?;

        debug!(
            item_count = items.len(),
            timeframe = ?timeframe,
            "Computing stats snapshot"
        );

        Ok(stats::compute(&items, timeframe, Utc::now().date_naive()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use flip_core::money::Money;
    use flip_core::types::{Category, Condition};

    fn init_tracing() {
        // RUST_LOG-controlled output for debugging test failures
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    async fn test_engine() -> Engine {
        init_tracing();
        let db = Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database");
        Engine::new(db.items())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_item(brand: &str, purchase_cents: i64) -> NewItem {
        NewItem {
            organization_id: flip_core::DEFAULT_ORGANIZATION_ID.to_string(),
            brand: brand.to_string(),
            model: "Speedy 30".to_string(),
            category: Category::Bag,
            condition: Condition::Good,
            purchase_price: Money::from_cents(purchase_cents),
            purchase_date: date(2026, 5, 1),
            purchase_source: "flea market".to_string(),
            image_urls: vec![],
            notes: None,
        }
    }

    fn aggregate(price: i64) -> AggregateSale {
        AggregateSale {
            sale_price: Money::from_cents(price),
            platform_fees: Money::from_cents(0),
            shipping_cost: Money::from_cents(0),
            sale_date: date(2026, 8, 15),
            channel: "vinted".to_string(),
            buyer: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_roundtrip() {
        let engine = test_engine().await;

        let created = engine.create_item(new_item("Gucci", 45000)).await.unwrap();
        assert_eq!(created.status(), Status::InStock);

        let fetched = engine.get_item(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_brand() {
        let engine = test_engine().await;
        let err = engine.create_item(new_item("   ", 100)).await.unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_reserve_and_cancel_roundtrip() {
        let engine = test_engine().await;
        let item = engine.create_item(new_item("Prada", 30000)).await.unwrap();

        let reserved = engine
            .transition(
                &item.id,
                TransitionAction::Reserve {
                    reserved_for: "Lena".to_string(),
                    duration_days: 7,
                },
            )
            .await
            .unwrap();
        assert_eq!(reserved.status(), Status::Reserved);

        // Reserving a reserved item is an illegal transition...
        let err = engine
            .transition(
                &item.id,
                TransitionAction::Reserve {
                    reserved_for: "Kim".to_string(),
                    duration_days: 7,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::InvalidTransition { .. })
        ));

        // ...and changed nothing
        let current = engine.get_item(&item.id).await.unwrap();
        assert_eq!(current.reservation().unwrap().reserved_for, "Lena");

        let released = engine
            .transition(&item.id, TransitionAction::CancelReservation)
            .await
            .unwrap();
        assert_eq!(released.status(), Status::InStock);
        assert!(released.reservation().is_none());
    }

    #[tokio::test]
    async fn test_sell_from_reserved_and_cancel_sale() {
        let engine = test_engine().await;
        let item = engine.create_item(new_item("Hermès", 80000)).await.unwrap();

        engine
            .transition(
                &item.id,
                TransitionAction::Reserve {
                    reserved_for: "Noor".to_string(),
                    duration_days: 3,
                },
            )
            .await
            .unwrap();

        let sold = engine
            .transition(
                &item.id,
                TransitionAction::Sell(SaleRecord {
                    sale_price: Money::from_cents(150000),
                    sale_date: date(2026, 8, 20),
                    channel: "local".to_string(),
                    platform_fees: Money::zero(),
                    shipping_cost: Money::zero(),
                    buyer: Some("Noor".to_string()),
                }),
            )
            .await
            .unwrap();
        assert_eq!(sold.status(), Status::Sold);
        assert!(sold.reservation().is_none());

        let restocked = engine
            .transition(&item.id, TransitionAction::CancelSale)
            .await
            .unwrap();
        assert_eq!(restocked.status(), Status::InStock);
        assert!(restocked.sale().is_none());
    }

    #[test]
    fn test_transition_action_json_shape() {
        let action: TransitionAction = serde_json::from_str(
            r#"{"action":"reserve","reserved_for":"Lena","duration_days":7}"#,
        )
        .unwrap();
        assert!(matches!(
            action,
            TransitionAction::Reserve { ref reserved_for, duration_days: 7 }
                if reserved_for == "Lena"
        ));

        let json = serde_json::to_string(&TransitionAction::CancelSale).unwrap();
        assert_eq!(json, r#"{"action":"cancel_sale"}"#);
    }

    #[test]
    fn test_storage_conflict_maps_to_engine_conflict() {
        let err: EngineError = crate::error::DbError::Conflict {
            id: "item-1".to_string(),
            expected: Status::InStock,
        }
        .into();
        assert!(matches!(err, EngineError::Conflict(id) if id == "item-1"));
    }

    #[tokio::test]
    async fn test_transition_missing_item() {
        let engine = test_engine().await;
        let err = engine
            .transition("ghost", TransitionAction::CancelReservation)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_settle_three_item_bundle() {
        let engine = test_engine().await;

        let mut ids = Vec::new();
        for i in 0..3 {
            let item = engine
                .create_item(new_item(&format!("Brand{i}"), 10000))
                .await
                .unwrap();
            ids.push(item.id);
        }

        // €100.00 over 3 items: 3334 + 3333 + 3333
        let outcome = engine.settle(&ids, aggregate(10000)).await.unwrap();

        let settled = match outcome {
            SettlementOutcome::Completed { settled } => settled,
            other => panic!("expected Completed, got {other:?}"),
        };
        assert_eq!(settled.len(), 3);
        assert_eq!(settled[0].allocation.sale_price.cents(), 3334);
        assert_eq!(settled[1].allocation.sale_price.cents(), 3333);
        assert_eq!(settled[2].allocation.sale_price.cents(), 3333);

        // All three persisted as sold, with their allocated share
        for (id, expected) in ids.iter().zip([3334i64, 3333, 3333]) {
            let item = engine.get_item(id).await.unwrap();
            assert_eq!(item.status(), Status::Sold);
            assert_eq!(item.sale().unwrap().sale_price.cents(), expected);
            assert_eq!(item.sale().unwrap().channel, "vinted");
        }
    }

    #[tokio::test]
    async fn test_settle_continues_past_missing_item() {
        let engine = test_engine().await;

        let a = engine.create_item(new_item("A", 1000)).await.unwrap();
        let c = engine.create_item(new_item("C", 1000)).await.unwrap();
        let ids = vec![a.id.clone(), "ghost".to_string(), c.id.clone()];

        let outcome = engine.settle(&ids, aggregate(9999)).await.unwrap();

        let (settled, failed) = match outcome {
            SettlementOutcome::Partial { settled, failed } => (settled, failed),
            other => panic!("expected Partial, got {other:?}"),
        };
        assert_eq!(settled.len(), 2);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].item_id, "ghost");
        assert!(matches!(failed[0].error, EngineError::NotFound(_)));

        // The items around the failure both settled, keeping their
        // position-based allocation (first item still has the remainder).
        assert_eq!(settled[0].item_id, a.id);
        assert_eq!(settled[0].allocation.sale_price.cents(), 3333);
        assert_eq!(settled[1].item_id, c.id);
        assert_eq!(settled[1].allocation.sale_price.cents(), 3333);
    }

    #[tokio::test]
    async fn test_settle_already_sold_item_fails_only_that_item() {
        let engine = test_engine().await;

        let a = engine.create_item(new_item("A", 1000)).await.unwrap();
        let b = engine.create_item(new_item("B", 1000)).await.unwrap();

        engine.settle(&[a.id.clone()], aggregate(5000)).await.unwrap();

        let outcome = engine
            .settle(&[a.id.clone(), b.id.clone()], aggregate(8000))
            .await
            .unwrap();

        let (settled, failed) = match outcome {
            SettlementOutcome::Partial { settled, failed } => (settled, failed),
            other => panic!("expected Partial, got {other:?}"),
        };
        assert_eq!(failed[0].item_id, a.id);
        assert!(matches!(
            failed[0].error,
            EngineError::Core(CoreError::InvalidTransition { .. })
        ));
        assert_eq!(settled[0].item_id, b.id);

        // The first sale is untouched by the failed re-settlement
        let a_now = engine.get_item(&a.id).await.unwrap();
        assert_eq!(a_now.sale().unwrap().sale_price.cents(), 5000);
    }

    #[tokio::test]
    async fn test_settle_empty_bundle_rejected_upfront() {
        let engine = test_engine().await;
        let err = engine.settle(&[], aggregate(10000)).await.unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::EmptyBundle)));
    }

    #[tokio::test]
    async fn test_settle_bad_aggregate_touches_nothing() {
        let engine = test_engine().await;
        let item = engine.create_item(new_item("A", 1000)).await.unwrap();

        let err = engine
            .settle(&[item.id.clone()], aggregate(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Core(CoreError::InvalidInput(_))));

        let current = engine.get_item(&item.id).await.unwrap();
        assert_eq!(current.status(), Status::InStock);
    }

    #[tokio::test]
    async fn test_list_pagination_and_filter() {
        let engine = test_engine().await;

        let mut ids = Vec::new();
        for i in 0..3 {
            let item = engine
                .create_item(new_item(&format!("Brand{i}"), 1000))
                .await
                .unwrap();
            ids.push(item.id);
        }
        engine
            .settle(&[ids[0].clone()], aggregate(2000))
            .await
            .unwrap();

        let page = engine.list_items(None, 0).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 3);

        let sold = engine.list_items(Some(Status::Sold), 0).await.unwrap();
        assert_eq!(sold.total, 1);
        assert_eq!(sold.items[0].id, ids[0]);

        let beyond = engine.list_items(None, 1).await.unwrap();
        assert_eq!(beyond.total, 3);
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn test_stats_over_seeded_inventory() {
        let engine = test_engine().await;

        // Two sold (€20.00 revenue on €10.00 cost), one still in stock
        let a = engine.create_item(new_item("Chanel", 500)).await.unwrap();
        let b = engine.create_item(new_item("Chanel", 500)).await.unwrap();
        engine.create_item(new_item("Dior", 700)).await.unwrap();

        let outcome = engine
            .settle(
                &[a.id, b.id],
                AggregateSale {
                    sale_price: Money::from_cents(2000),
                    platform_fees: Money::from_cents(200),
                    shipping_cost: Money::zero(),
                    sale_date: Utc::now().date_naive(),
                    channel: "vinted".to_string(),
                    buyer: None,
                },
            )
            .await
            .unwrap();
        assert!(matches!(outcome, SettlementOutcome::Completed { .. }));

        let snapshot = engine.stats(Timeframe::AllTime).await.unwrap();
        assert_eq!(snapshot.total_sales, 2);
        assert_eq!(snapshot.total_revenue.cents(), 2000);
        // profit = 2000 - 1000 cost - 200 fees
        assert_eq!(snapshot.total_profit.cents(), 800);
        assert_eq!(snapshot.stock_count, 1);
        assert_eq!(snapshot.inventory_value.cents(), 700);
        assert_eq!(snapshot.channels.len(), 1);
        assert_eq!(snapshot.channels[0].channel, "vinted");
    }

    #[tokio::test]
    async fn test_delete_item() {
        let engine = test_engine().await;
        let item = engine.create_item(new_item("Fendi", 1000)).await.unwrap();

        engine.delete_item(&item.id).await.unwrap();
        assert!(matches!(
            engine.get_item(&item.id).await.unwrap_err(),
            EngineError::NotFound(_)
        ));
        assert!(matches!(
            engine.delete_item(&item.id).await.unwrap_err(),
            EngineError::NotFound(_)
        ));
    }
}
