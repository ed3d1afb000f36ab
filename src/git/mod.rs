mod context;

pub use context::GitContext;
