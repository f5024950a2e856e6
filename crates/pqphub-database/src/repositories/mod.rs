//! Repository implementations for all PQP Hub collections.

pub mod file;
pub mod paper;
pub mod subject;
pub mod user;

pub use file::FileRepository;
pub use paper::PaperRepository;
pub use subject::SubjectRepository;
pub use user::UserRepository;
