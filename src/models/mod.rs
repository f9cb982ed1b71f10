pub mod member;
pub mod submission;

pub use member::MemberRecord;
pub use submission::{LectureEntry, Personal, SubmissionPayload, SubmissionRecord};
