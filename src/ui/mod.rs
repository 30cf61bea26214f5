//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: the main interaction loop that routes keys to
//!   [`crate::core::app::AppAction`]s and runs network commands in the
//!   background.
//! - [`renderer`] and [`transcript`]: view composition and frame output.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns domain logic and backend coordination.

pub mod chat_loop;
pub mod renderer;
pub mod transcript;
