//! Sheet model - the complete state of one editable grid
//!
//! Follows the Elm Architecture pattern: the host sends [`Msg`](crate::Msg)
//! values through [`Sheet::dispatch`] and reacts to the returned
//! [`Cmd`](crate::Cmd).

mod sheet;

pub use sheet::{ChangeListener, Sheet};
