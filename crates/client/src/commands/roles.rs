use std::io::Write;

use super::{Context, Outcome};
use crate::cli::roles::RolesAction;
use crate::client::non_empty;
use crate::client::roles::ListRolesQuery;
use crate::error::Result;

pub(super) async fn run<W: Write>(action: RolesAction, ctx: &mut Context<'_, W>) -> Result<Outcome> {
    let roles = ctx.client.roles();

    match action {
        RolesAction::List => {
            let query = ListRolesQuery { max: Some(ctx.max) };
            ctx.output.render(&roles.list(&query).await?)?;
        }
        RolesAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["roles", "get"]));
            };
            ctx.output.render(&roles.get(&id).await?)?;
        }
    }

    Ok(Outcome::Done)
}
