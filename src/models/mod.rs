pub mod course;
pub mod error;
pub mod mogi;
pub mod stats;
pub mod tracker;
