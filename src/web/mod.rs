//! HTML presentation of the evaluator: the input form and its result view.

pub mod handlers;
