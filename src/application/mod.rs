//! Application layer containing the core cart logic.
//!
//! This module defines the `CartEngine`, the only component allowed to
//! mutate cart state. It validates every mutation against the stock service
//! and keeps the durable snapshot in lockstep with the in-memory view.

pub mod engine;
