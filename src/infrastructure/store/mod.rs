//! Snippet persistence adapters

mod json;

pub use json::JsonSnippetStore;
