//! Leadboard: a kanban-style pipeline board for sales leads.
//!
//! Leads move through five fixed stages (new, contacted, qualified, won,
//! lost). The board is persisted as one JSON document per key in a
//! key-value store and can be populated by hand, from CSV or JSON files, or
//! by syncing a (simulated) external CRM.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem,
//!   simulated CRMs)
//!
//! # Modules
//!
//! - [`board`]: Leads, columns, the persistent board store and the team
//!   roster
//! - [`import`]: CSV and JSON parsing and field mapping
//! - [`dnd`]: Drag gesture tracking and drop resolution
//! - [`integration`]: CRM connectors and sync orchestration
//! - [`notification`]: User-facing notifications
//! - [`config`]: Runtime configuration

pub mod board;
pub mod config;
pub mod dnd;
pub mod import;
pub mod integration;
pub mod notification;
