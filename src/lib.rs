//! Event planning chat
//!
//! Keeps a structured set of event fields, talks to a language model about
//! them, and turns the model's JSON suggestion blocks into field edits the
//! user can accept or reject.

pub mod ai;
pub mod app;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod help;
pub mod notification;
pub mod planner;
pub mod scroll;

#[cfg(test)]
mod test_utils;
