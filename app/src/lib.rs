//! Terminal frontend for the to-do service.
//!
//! The original single page maps onto plain Rust pieces: the input form is a
//! line-oriented command language ([`command`]), the list and footer are
//! pure render functions ([`view`]), and the page's state lives in an
//! [`onelist_core::ItemStore`] owned by [`App`], which re-renders whenever
//! the store's revision moves. All network traffic goes through
//! [`UreqTransport`], the blocking [`onelist_core::Transport`] for real use.

pub mod app;
pub mod command;
pub mod transport;
pub mod view;

pub use app::{App, Feedback};
pub use command::{Command, CommandError};
pub use transport::UreqTransport;
