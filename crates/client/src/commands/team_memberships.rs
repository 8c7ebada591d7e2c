use std::io::Write;

use super::{Context, Outcome};
use crate::cli::team_memberships::TeamMembershipsAction;
use crate::client::non_empty;
use crate::client::team_memberships::{
    CreateTeamMembershipRequest, ListTeamMembershipsQuery, UpdateTeamMembershipRequest,
};
use crate::error::Result;

pub(super) async fn run<W: Write>(
    action: TeamMembershipsAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    let team_memberships = ctx.client.team_memberships();

    match action {
        TeamMembershipsAction::List { team } => {
            let query = ListTeamMembershipsQuery {
                team_id: non_empty(team),
                max: Some(ctx.max),
            };
            ctx.output.render(&team_memberships.list(&query).await?)?;
        }
        TeamMembershipsAction::Create {
            team,
            person_id,
            person_email,
            moderator,
        } => {
            let membership = team_memberships
                .create(&CreateTeamMembershipRequest {
                    team_id: non_empty(team),
                    person_id: non_empty(person_id),
                    person_email: non_empty(person_email),
                    is_moderator: moderator,
                })
                .await?;
            ctx.output.render(&membership)?;
        }
        TeamMembershipsAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["team-memberships", "get"]));
            };
            ctx.output.render(&team_memberships.get(&id).await?)?;
        }
        TeamMembershipsAction::Update { id, moderator } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["team-memberships", "update"]));
            };
            let membership = team_memberships
                .update(
                    &id,
                    &UpdateTeamMembershipRequest {
                        is_moderator: moderator,
                    },
                )
                .await?;
            ctx.output.render(&membership)?;
        }
        TeamMembershipsAction::Delete { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["team-memberships", "delete"]));
            };
            let status = team_memberships.delete(&id).await?;
            ctx.output.status(status)?;
        }
    }

    Ok(Outcome::Done)
}
