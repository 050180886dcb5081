//! CLI library components for the OPPS code mapper.

pub mod logging;
pub mod pipeline;
