//! Quiz session engine for generated study notes: shows questions, has the
//! grading service mark each answer, and turns the final evaluation report
//! into a fresh quiz.

pub mod api;
pub mod config;
pub mod quiz;
pub mod storage;
