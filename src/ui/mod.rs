//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (operations, structure state, captured output, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a demo name and
//! its captured [`Tracer`] and call [`App::run`] to step through the recorded
//! snapshots forward and backward.
//!
//! [`Tracer`]: crate::trace::Tracer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
