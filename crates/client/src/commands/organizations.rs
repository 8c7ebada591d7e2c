use std::io::Write;

use super::{Context, Outcome};
use crate::cli::organizations::OrganizationsAction;
use crate::client::non_empty;
use crate::client::organizations::ListOrganizationsQuery;
use crate::error::Result;

pub(super) async fn run<W: Write>(
    action: OrganizationsAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    let organizations = ctx.client.organizations();

    match action {
        OrganizationsAction::List => {
            let query = ListOrganizationsQuery { max: Some(ctx.max) };
            ctx.output.render(&organizations.list(&query).await?)?;
        }
        OrganizationsAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["organizations", "get"]));
            };
            ctx.output.render(&organizations.get(&id).await?)?;
        }
    }

    Ok(Outcome::Done)
}
