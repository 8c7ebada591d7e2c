use std::io::Write;

use super::{Context, Outcome};
use crate::cli::webhooks::WebhooksAction;
use crate::client::webhooks::ListWebhooksQuery;
use crate::error::Result;

pub(super) async fn run<W: Write>(
    action: WebhooksAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    match action {
        WebhooksAction::List => {
            let query = ListWebhooksQuery { max: Some(ctx.max) };
            let webhooks = ctx.client.webhooks().list(&query).await?;
            ctx.output.render(&webhooks)?;
        }
    }

    Ok(Outcome::Done)
}
