pub mod announcement;
pub mod course;
pub mod faculty;
pub mod job;
pub mod saved_item;
pub mod user;
pub mod validation;

pub use announcement::*;
pub use course::*;
pub use faculty::*;
pub use job::*;
pub use saved_item::*;
pub use user::*;
pub use validation::*;
