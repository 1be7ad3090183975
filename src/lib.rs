//! Study Cuddie core: work-life balance scoring for students aged 10 to 18,
//! Gemini-backed improvement suggestions, and an in-memory weekly study
//! planner. UI shells call in through [`commands`].

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
