use std::io::Write;

use super::{Context, Outcome};
use crate::cli::memberships::MembershipsAction;
use crate::client::memberships::{
    CreateMembershipRequest, ListMembershipsQuery, UpdateMembershipRequest,
};
use crate::client::non_empty;
use crate::error::Result;

pub(super) async fn run<W: Write>(
    action: MembershipsAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    let memberships = ctx.client.memberships();

    match action {
        MembershipsAction::List {
            room,
            person_id,
            person_email,
        } => {
            let query = ListMembershipsQuery {
                room_id: non_empty(room),
                person_id: non_empty(person_id),
                person_email: non_empty(person_email),
                max: Some(ctx.max),
            };
            ctx.output.render(&memberships.list(&query).await?)?;
        }
        MembershipsAction::Create {
            room,
            person_id,
            person_email,
            moderator,
        } => {
            let membership = memberships
                .create(&CreateMembershipRequest {
                    room_id: non_empty(room),
                    person_id: non_empty(person_id),
                    person_email: non_empty(person_email),
                    is_moderator: moderator,
                })
                .await?;
            ctx.output.render(&membership)?;
        }
        MembershipsAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["memberships", "get"]));
            };
            ctx.output.render(&memberships.get(&id).await?)?;
        }
        MembershipsAction::Update { id, moderator } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["memberships", "update"]));
            };
            let membership = memberships
                .update(
                    &id,
                    &UpdateMembershipRequest {
                        is_moderator: moderator,
                    },
                )
                .await?;
            ctx.output.render(&membership)?;
        }
        MembershipsAction::Delete { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["memberships", "delete"]));
            };
            let status = memberships.delete(&id).await?;
            ctx.output.status(status)?;
        }
    }

    Ok(Outcome::Done)
}
