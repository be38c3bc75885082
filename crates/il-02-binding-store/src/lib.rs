//! # Binding Store Subsystem (IL-02)
//!
//! The authoritative mapping between `(appId, externalId)` and owner
//! addresses. For a fixed application the mapping is a bijection: an
//! external id resolves to at most one owner and an owner holds at most one
//! external id. Bindings are never deleted, only reassigned.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Dual-map ledger state and the bijection
//!   rules, no locking
//! - **Service Layer** (`service.rs`): Thread-safe facade; every mutation is
//!   gated on the manager capability, role administration on the admin role
//!
//! Mutations are reserved for manager principals (the identity manager
//! subsystem in a standard deployment); reads are public.

pub mod domain;
pub mod events;
pub mod service;

// Re-export public API
pub use domain::entities::BindRequest;
pub use domain::errors::StoreError;
pub use domain::store::BindingStore;
pub use events::StoreEvent;
pub use service::StoreService;
