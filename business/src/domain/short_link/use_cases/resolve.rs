use async_trait::async_trait;

use crate::domain::short_link::errors::ShortLinkError;
use crate::domain::short_link::model::ShortLinkTarget;

pub struct ResolveShortLinkParams {
    pub token: String,
}

#[async_trait]
pub trait ResolveShortLinkUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ResolveShortLinkParams,
    ) -> Result<ShortLinkTarget, ShortLinkError>;
}
