//! Live station board server.
//!
//! A web application that answers: "which trains are about to arrive at
//! or leave this station, and from which track?"

pub mod board;
pub mod cache;
pub mod digitraffic;
pub mod domain;
pub mod stations;
pub mod web;
