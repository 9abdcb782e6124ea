//! CLI command handlers
//!
//! This module contains the session command parser and handlers,
//! bridging clap argument parsing with the session service.

pub mod session;

pub use session::{
    handle_session_command, run_session, SessionCommand, SessionFlow, SessionLine,
    SessionOptions,
};
