//! Filters applied to raw text before feature extraction.

mod acronym_expand;
mod emoticon_replace;
mod link_remove;
mod lowercase;
mod punct_strip;

pub use acronym_expand::AcronymExpandFilter;
pub use emoticon_replace::EmoticonReplaceFilter;
pub use link_remove::LinkRemoveFilter;
pub use lowercase::LowercaseFilter;
pub use punct_strip::PunctStripFilter;
