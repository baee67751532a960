mod email;
mod submission;

pub use email::{Email, auto_reply, notification};
pub use submission::Submission;
