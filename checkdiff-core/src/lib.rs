//! # checkdiff-core
//!
//! Line-by-line comparison of two delimited text buffers.
//!
//! The first input carries `key<delim_a>value` records, the second carries
//! `key<delim_b>value` records. The comparison walks both inputs in lockstep
//! and stops at the first divergence, producing a single [`Verdict`].
//!
//! ```
//! use checkdiff_core::{compare, CompareOptions, Verdict};
//!
//! let verdict = compare("a,1\nb,2\n", "a\t1\nb\t2\n", &CompareOptions::default());
//! assert_eq!(verdict, Verdict::Equivalent);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod record;


pub use compare::{compare, compare_readers, read_text, Verdict};
pub use config::{CompareOptions, Side, DEFAULT_DELIMITER_A, DEFAULT_DELIMITER_B};
pub use error::{Error, Result};
pub use record::{parse_record, split_lines, Record};
