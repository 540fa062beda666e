// Coexist: spatiotemporal mutual exclusivity analysis for semantic keywords.
//
// This is the library root. Each module corresponds to one stage of the
// flow: collect occurrences, classify keyword pairs, report the results.

pub mod analysis;
pub mod config;
pub mod console;
pub mod input;
pub mod occurrence;
pub mod output;
