//! The stages of one sparkline invocation.
//!
//! - `table`: raw markdown table → dates and typed columns
//! - `streaks`: dates → consecutive-day chains and streak status
//! - `sparkline`: columns → SVG lines, markers and legend
//! - `assembler`: everything above → one markup fragment

pub mod assembler;
pub mod sparkline;
pub mod streaks;
pub mod table;
