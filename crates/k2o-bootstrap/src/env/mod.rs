//! Isolated environment provisioning: a fixed-name `venv/` next to the app.
//!
//! Callers pass the app directory and a chosen interpreter; this module
//! creates the venv on first run and returns its path. The runner receives
//! only an `Activation` built from that path.

pub mod builder;
