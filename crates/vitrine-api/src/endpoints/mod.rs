//! Endpoint modules. Each declares itself with an `inventory::submit!`
//! entry; nothing here is wired up by hand.

pub mod sample;
pub mod service;
