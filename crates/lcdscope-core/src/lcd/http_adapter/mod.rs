//! Native REST client for Cosmos SDK LCD endpoints.
//!
//! Implements [`LcdApi`](super::LcdApi) over HTTP(S) using `reqwest`, with
//! per-call query parameters, JSON bodies, strict 2xx status handling and
//! an optional request timeout.

mod client;
mod connection;
mod protocol;

pub use client::HttpLcdClient;
