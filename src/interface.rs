#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::config::Config;
use crate::error::Result;
use crate::model::{ActivitySet, MembershipParams, MutationOutcome};
use crate::notice::Notice;
use crate::view::{ListView, SelectOption};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new(config: &Config) -> Result<Self>
    where
        Self: Sized;
}

/// Backend operations the board depends on
pub trait ActivityApi {
    /// Fetch the full activity set, bypassing caches
    async fn fetch_activities(&self) -> Result<ActivitySet>;

    /// Sign a participant up for an activity
    async fn signup(&self, params: MembershipParams<'_>) -> Result<MutationOutcome>;

    /// Remove a participant from an activity
    async fn unregister(&self, params: MembershipParams<'_>) -> Result<MutationOutcome>;
}

/// Where the board commits what it rendered.
pub trait Surface {
    fn commit_list(&self, list: &ListView);

    /// Replaces every option, placeholder included.
    fn commit_options(&self, options: &[SelectOption]);

    /// `None` hides the status region.
    fn commit_notice(&self, notice: Option<&Notice>);

    fn reset_form(&self);
}

/// Interactive yes/no prompt.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}
