pub mod content;
pub mod gateway;
pub mod presentation;
