//! Clip Buddy - clipboard history assistant
//!
//! Watches the system clipboard, keeps a bounded buffer of recent text
//! entries plus a persisted set of pinned snippets, and hands entries back
//! through a trigger in one of four paste modes (default list, stack,
//! queue, random).
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: History entity, value objects (capacity, mode, hotkey), config and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-clipboard, JSON/TOML files, notifications)
//! - **CLI**: Command-line interface, IPC, daemon runner and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
