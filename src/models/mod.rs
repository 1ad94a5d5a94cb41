pub mod activity;
pub mod query;
pub mod vocabulary;

pub use activity::{Idea, LegacyField, NormalizedActivity, RawActivity};
pub use query::{IdeaQuery, IdeasResponse, Mood};
pub use vocabulary::Namespace;
