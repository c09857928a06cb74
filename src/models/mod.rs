pub mod subscriber;
pub mod vacancy;
