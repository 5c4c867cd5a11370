//! Request handlers

pub mod pages;
pub mod tokens;
