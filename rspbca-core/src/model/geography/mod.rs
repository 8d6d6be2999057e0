mod geography_error;
mod geography_membership;
mod geography_tagger;
mod geography_tier;
mod link_set_tagger;
pub mod select_link;

pub use geography_error::GeographyError;
pub use geography_membership::GeographyMembership;
pub use geography_tagger::{GeographyTagger, NoGeography};
pub use geography_tier::GeographyTier;
pub use link_set_tagger::LinkSetTagger;
