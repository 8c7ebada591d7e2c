use std::io::Write;

use super::{Context, Outcome};
use crate::cli::licenses::LicensesAction;
use crate::client::licenses::ListLicensesQuery;
use crate::client::non_empty;
use crate::error::Result;

pub(super) async fn run<W: Write>(
    action: LicensesAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    let licenses = ctx.client.licenses();

    match action {
        LicensesAction::List { org_id } => {
            let query = ListLicensesQuery {
                org_id: non_empty(org_id),
                max: Some(ctx.max),
            };
            ctx.output.render(&licenses.list(&query).await?)?;
        }
        LicensesAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["licenses", "get"]));
            };
            ctx.output.render(&licenses.get(&id).await?)?;
        }
    }

    Ok(Outcome::Done)
}
