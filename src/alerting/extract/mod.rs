//! The four signal extractors. Each queries one slice of the store, derives
//! a due date per its own rule, classifies it, and emits zero or one alert
//! per record; `Vigente` records produce no output.

mod exams;
mod legal;
mod prescriptions;
mod protocols;

pub use exams::WorkerExamExtractor;
pub use legal::LegalDocumentExtractor;
pub use prescriptions::PrescriptionExtractor;
pub use protocols::ProtocolValidityExtractor;
