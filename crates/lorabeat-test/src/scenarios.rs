//! End-to-end scenarios: scheduler, simulated link, monitor node
//!
//! Virtual time throughout: the sender is driven tick by tick and the
//! receiver polls at explicit instants, so no test sleeps.
