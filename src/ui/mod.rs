//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus and scrolling
//! - **[`panes`]**: stateless render functions for each channel view (normalized
//!   source, tokens, reserved table, parse results) and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PipelineOutput`] and call [`App::run`] to start the event loop.
//!
//! [`PipelineOutput`]: crate::pipeline::PipelineOutput
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
