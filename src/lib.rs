pub mod cli;
pub mod config;
pub mod error;
pub mod source;
pub mod geocode;
pub mod pages;
pub mod export;
pub mod selector;
