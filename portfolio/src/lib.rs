//! # portfolio
//!
//! Single-page personal portfolio rendered in the browser with Leptos.
//!
//! The page logic is kept apart from the DOM so it can be tested natively:
//!
//! - [`navigation`] - active section and smooth in-page scrolling
//! - [`typewriter`] - the role text state machine
//! - [`timer`] - cancellable timers and the loop that drives the typewriter
//! - [`contact`] - contact form validation and local submission
//! - [`theme`] - light/dark flag
//! - [`config`] - embedded `site.toml`
//!
//! [`dom`], [`logging`] and the components under [`sections`] are the
//! browser side.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod dom;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod sections;
pub mod theme;
pub mod timer;
pub mod typewriter;

pub use app::App;
pub use config::SiteConfig;
