use std::io::Write;

use super::{Context, Outcome};
use crate::cli::people::PeopleAction;
use crate::client::non_empty;
use crate::client::people::ListPeopleQuery;
use crate::error::Result;

pub(super) async fn run<W: Write>(action: PeopleAction, ctx: &mut Context<'_, W>) -> Result<Outcome> {
    let people = ctx.client.people();

    match action {
        PeopleAction::List {
            email,
            name,
            org_id,
        } => {
            let query = ListPeopleQuery {
                email: non_empty(email),
                display_name: non_empty(name),
                org_id: non_empty(org_id),
                max: Some(ctx.max),
            };
            ctx.output.render(&people.list(&query).await?)?;
        }
        PeopleAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["people", "get"]));
            };
            ctx.output.render(&people.get(&id).await?)?;
        }
        PeopleAction::Me => {
            ctx.output.render(&people.me().await?)?;
        }
    }

    Ok(Outcome::Done)
}
