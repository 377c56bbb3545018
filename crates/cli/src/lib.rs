//! Terminal shell for the comptalite ledger.
//!
//! This crate is the "UI collaborator": it owns the four-page routing
//! session, renders each page as text, and parses form input. All domain
//! logic stays in `comptalite-ledger`; the shell only decides what to show
//! next.

pub mod forms;
pub mod render;
pub mod session;

pub use session::{Page, Session, SessionError};
