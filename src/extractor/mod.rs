pub mod chain;
pub mod matchers;
pub mod models;
pub mod traits;

pub use chain::{extract_share_id, extract_share_id_detailed, ShareIdExtractor};
pub use matchers::{GenericShareMatcher, HostedShareMatcher};
pub use models::{MatchRule, ShareId};
pub use traits::ShareIdMatcher;
