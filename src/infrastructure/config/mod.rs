//! Settings storage adapters

mod xdg;

pub use xdg::XdgConfigStore;
