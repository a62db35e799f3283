//! Editor View: the list-mutation contract and the form bound to it.

pub mod handlers;
pub mod ops;
pub mod view;
