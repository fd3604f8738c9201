//! # flip-db: Storage & Engine Services for Flip POS
//!
//! SQLite persistence plus the engine service that drives the pure logic
//! in flip-core.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       flip-db Crate Structure                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      engine (Engine)                             │  │
//! │  │   create / transition / settle / list / stats                    │  │
//! │  │   owns the clock, IDs, and partial-failure policy                │  │
//! │  └───────────────┬──────────────────────────┬───────────────────────┘  │
//! │                  │ pure calls               │ reads/writes              │
//! │                  ▼                          ▼                           │
//! │        ┌──────────────────┐     ┌──────────────────────────┐           │
//! │        │    flip-core     │     │  repository (ItemRepo)   │           │
//! │        │  lifecycle,      │     │  row ⇄ domain mapping,   │           │
//! │        │  settlement,     │     │  single-row atomic       │           │
//! │        │  stats           │     │  state updates           │           │
//! │        └──────────────────┘     └────────────┬─────────────┘           │
//! │                                              │                          │
//! │                                 ┌────────────▼─────────────┐           │
//! │                                 │  pool (Database) + WAL   │           │
//! │                                 │  migrations (embedded)   │           │
//! │                                 └──────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust,ignore
//! use flip_db::{Database, DbConfig, Engine};
//!
//! let db = Database::new(DbConfig::new("/path/to/flip.db")).await?;
//! let engine = Engine::new(db.items());
//!
//! let item = engine.create_item(new_item).await?;
//! let snapshot = engine.stats(Timeframe::ThisMonth).await?;
//! ```

pub mod engine;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// Re-exports for convenience
pub use engine::{
    Engine, EngineError, EngineResult, ItemPage, SettledItem, SettlementFailure,
    SettlementOutcome, TransitionAction,
};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::item::ItemRepository;
