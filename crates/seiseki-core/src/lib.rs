//! seiseki-core — Scoring rules, schedule codecs, and timeline projection.
//!
//! This crate holds the UI-independent domain logic of the training-center
//! toolkit: the pass/fail evaluation engine, the schedule and teacher
//! assignment string codecs, and the task timeline projector. Every
//! operation is a synchronous pure function over caller-supplied data.

pub mod assignment;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod parser;
pub mod report;
pub mod schedule;
pub mod timeline;
