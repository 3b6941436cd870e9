mod conduct_interview;

pub use conduct_interview::*;
