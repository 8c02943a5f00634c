//! Hand-off to the zellij client.
pub mod interface;
pub mod session;
