//! Headless client for the portfolio content API.
//!
//! Mirrors what the site does in the browser: fetch the three content
//! documents concurrently, render them into a page model, keep a persisted
//! theme preference, and build the messaging deep link a service card opens.
//! Every component takes its targets explicitly so it can be driven and
//! inspected in tests without a browser.

pub mod handoff;
pub mod loader;
pub mod model;
pub mod nav;
pub mod page;
pub mod render;
pub mod settings;
