//! discoaid library crate.
//!
//! Recovers message JSON from Discohook links. A Discohook data link carries
//! the whole message draft as base64url-encoded JSON in its `data` query
//! parameter; a share link redirects to such a data link. This crate
//! classifies the link, decodes the payload, trims fields that only matter
//! to the editor, and renders one JSON document per message.

pub mod clean;
pub mod cli;
pub mod config;
pub mod decode;
pub mod link;
pub mod render;
pub mod resolve;
