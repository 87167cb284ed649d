mod process_query;
mod resolve_questions;

pub use process_query::{resolution_failure_code, ProcessQueryUseCase, ProcessedQuery};
pub use resolve_questions::ResolveQuestionsUseCase;
