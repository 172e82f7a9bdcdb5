//! Built-in entity panels.
//!
//! Each plugin module declares one entity descriptor and exposes a
//! `register` helper that publishes it into a console.

pub mod sudocmd;
