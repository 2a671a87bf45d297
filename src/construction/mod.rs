//! Worker lifecycle, build dispatch and site selection.

pub mod builder;
pub mod placement;
pub mod pool;

pub use builder::{Builder, PendingBuild};
pub use placement::SiteLocator;
pub use pool::BuilderPool;
