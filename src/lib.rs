//! Core library for the `revealer` countdown server.
//!
//! Computes the time left until a target moment, renders a calendar
//! placeholder while waiting, and once the moment passes loops a pre-rendered
//! cake-cutting reveal. Everything is driven by polls from the hosting page;
//! the `revealer` binary wires it to a small HTTP server.
pub mod animation;
pub mod args;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod entry;
pub mod error;
pub mod render;
pub mod server;
pub mod settings;
pub mod shutdown;
pub mod system;
