pub mod courses;
pub mod data;
pub mod history;
pub mod mogi;
pub mod stats;
