//! Gemchat is a terminal chat front-end that streams Gemini API responses
//! into a running, in-memory conversation.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns session state: the transcript and its alternation
//!   invariant, the prompt template, the model-client factory, and the
//!   streaming turn pipeline.
//! - [`auth`] validates and resolves the API credential (interactive
//!   submission or the `GOOGLE_API_KEY` environment fallback).
//! - [`api`] defines the request/response payloads for the Gemini
//!   `streamGenerateContent` endpoint.
//! - [`cli`] is the thin presentation layer: an interactive line loop and a
//!   one-shot `say` mode, both of which only call into [`core::session`].
//!
//! The binary entrypoint (`src/main.rs`) routes through [`crate::cli::main`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod core;
pub mod logging;
pub mod utils;
