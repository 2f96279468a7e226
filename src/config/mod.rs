//! Configuration module

mod site;

pub use site::ArchiveConfig;
pub use site::FeaturesConfig;
pub use site::GridConfig;
pub use site::ImageConfig;
pub use site::SiteConfig;
