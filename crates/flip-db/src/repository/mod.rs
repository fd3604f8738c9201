//! # Repository Module
//!
//! Database repository implementations for Flip POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Engine service                                                        │
//! │       │                                                                 │
//! │       │  db.items().get_by_id(&id)                                     │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── insert(&self, item)                                               │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update_state(&self, id, from, state)  ← atomic compare-and-set   │
//! │  ├── list(&self, org, filter, page)                                    │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Row ⇄ domain conversion enforces the status invariant on read       │
//! │  • Engine services stay free of SQL                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod item;
