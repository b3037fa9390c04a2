//! `depot-api` — HTTP surface of the fulfillment back office.

pub mod app;
