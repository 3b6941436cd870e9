pub mod interview_controller;

pub use interview_controller::InterviewController;
