//! pdfchat is a terminal client for asking questions about a PDF held by a
//! document question-answering server.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the client state machine: the active document, the
//!   transcript, the single in-flight operation and configuration.
//! - [`api`] defines the wire payloads and the HTTP backend that talks to the
//!   server's upload, chat and health endpoints.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into [`ui::chat_loop`] for
//! interactive sessions or runs one-shot commands directly.

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
