pub mod gov;
pub mod profiles;
pub mod registry;
pub mod tiers;

pub use gov::{is_government_host, is_government_url, is_high_security_host, DelayClass};
pub use profiles::SiteProfile;
pub use registry::{blacklist, is_blacklisted, list_sources, preferred_sources};
pub use tiers::{reliability_rating, source_tier};
