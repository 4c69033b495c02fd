//! HTML extraction: raw page in, typed records out.
//!
//! Markup that no longer matches the expected structure yields an empty
//! list, never an error.

pub mod quotes;
pub mod role_stats;
