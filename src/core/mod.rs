pub mod submit;

pub use submit::SubmissionService;
