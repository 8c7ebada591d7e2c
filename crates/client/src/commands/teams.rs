use std::io::Write;

use sparkctl_core::TeamFilter;

use super::{Context, Outcome};
use crate::cli::teams::TeamsAction;
use crate::client::non_empty;
use crate::client::teams::{ListTeamsQuery, TeamRequest};
use crate::error::Result;

pub(super) async fn run<W: Write>(action: TeamsAction, ctx: &mut Context<'_, W>) -> Result<Outcome> {
    let teams = ctx.client.teams();

    match action {
        TeamsAction::List { name } => {
            let query = ListTeamsQuery { max: Some(ctx.max) };
            let filter = TeamFilter::from_flags(name.as_deref());
            let found = filter.apply(teams.list(&query).await?);
            ctx.output.render(&found)?;
        }
        TeamsAction::Create { name } => {
            let team = teams
                .create(&TeamRequest {
                    name: non_empty(name),
                })
                .await?;
            ctx.output.render(&team)?;
        }
        TeamsAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["teams", "get"]));
            };
            ctx.output.render(&teams.get(&id).await?)?;
        }
        TeamsAction::Update { id, name } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["teams", "update"]));
            };
            let team = teams
                .update(
                    &id,
                    &TeamRequest {
                        name: non_empty(name),
                    },
                )
                .await?;
            ctx.output.render(&team)?;
        }
        TeamsAction::Delete { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["teams", "delete"]));
            };
            let status = teams.delete(&id).await?;
            ctx.output.status(status)?;
        }
    }

    Ok(Outcome::Done)
}
