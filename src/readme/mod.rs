//! Folder resolution and README generation.
//!
//! 1. **FolderResolver** maps a free-text request onto one folder of the tree.
//! 2. **SummarizationPipeline** summarizes that folder's text files one by one
//!    and merges the summaries into `README.md`.

mod model;
mod pipeline;
mod prompts;
mod resolver;

pub use model::TargetFolder;
pub use pipeline::SummarizationPipeline;
pub use resolver::FolderResolver;
