//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result model (ResultCode, ResultCodes, Outcome)
//! - Execution context parsed from the framework's signals
//! - Plugin error taxonomy
//! - Token counting over a byte stream

pub mod context;
pub mod error;
pub mod model;
pub mod tokenizer;
