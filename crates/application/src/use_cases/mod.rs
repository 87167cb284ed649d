pub mod dns;

pub use dns::{ProcessQueryUseCase, ProcessedQuery, ResolveQuestionsUseCase};
