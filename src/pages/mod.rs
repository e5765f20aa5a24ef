//! Headless page controllers.
//!
//! Each controller owns the state one screen of the marketplace needs (lists,
//! dialogs, form fields, error banner) and drives the services behind it. A
//! front end only renders what they expose.

pub mod announcement_management;
pub mod details;
pub mod faculty_management;
pub mod forgot_password;
pub mod management;

pub use announcement_management::{AnnouncementCollection, AnnouncementManagementPage};
pub use details::{DetailState, DetailsPage, Listing};
pub use faculty_management::{FacultyCollection, FacultyManagementPage};
pub use forgot_password::ForgotPasswordPage;
pub use management::{ManagedCollection, ManagementPage, SubmitOutcome};
