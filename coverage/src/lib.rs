#[macro_use]
extern crate lazy_static;

pub mod analysis;
pub mod codepoint;
pub mod properties;
pub mod record;
pub mod report;
pub mod tables;

mod error;

pub use error::CoverageError;
pub use error::UnknownCategory;

pub use codepoint::format_code;
pub use codepoint::format_range;
pub use codepoint::resolve;
pub use codepoint::resolve_sequence;

pub use record::Catalog;
pub use record::CharacterRecord;
pub use record::ResolvedCharacter;

pub use tables::CodeRange;
pub use tables::UnicodeBlock;
pub use tables::CATEGORY_RANGES;
pub use tables::UNICODE_BLOCKS;

pub use analysis::analyze_coverage;
pub use analysis::find_gaps;
pub use analysis::summarize_categories;

pub use report::Analysis;
pub use report::ReportSet;
pub use report::Selection;
