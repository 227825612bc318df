pub mod pages;

pub use pages::{home_page, submit_form};
