use std::io::Write;

use sparkctl_core::RoomFilter;

use super::{Context, Outcome};
use crate::cli::rooms::RoomsAction;
use crate::client::non_empty;
use crate::client::rooms::{CreateRoomRequest, ListRoomsQuery, UpdateRoomRequest};
use crate::error::Result;

pub(super) async fn run<W: Write>(action: RoomsAction, ctx: &mut Context<'_, W>) -> Result<Outcome> {
    let rooms = ctx.client.rooms();

    match action {
        RoomsAction::List {
            room_type,
            name,
            team_id,
        } => {
            let query = ListRoomsQuery {
                max: Some(ctx.max),
                room_type: room_type.map(Into::into),
            };
            // The API has no title or team filter for this listing.
            let filter = RoomFilter::from_flags(name.as_deref(), team_id.as_deref());
            let found = filter.apply(rooms.list(&query).await?);
            tracing::debug!(count = found.len(), ?filter, "listed rooms");
            ctx.output.render(&found)?;
        }
        RoomsAction::Create { name, team_id } => {
            let room = rooms
                .create(&CreateRoomRequest {
                    title: non_empty(name),
                    team_id: non_empty(team_id),
                })
                .await?;
            ctx.output.render(&room)?;
        }
        RoomsAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["rooms", "get"]));
            };
            ctx.output.render(&rooms.get(&id).await?)?;
        }
        RoomsAction::Update { id, name } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["rooms", "update"]));
            };
            let room = rooms
                .update(&id, &UpdateRoomRequest { title: non_empty(name) })
                .await?;
            ctx.output.render(&room)?;
        }
        RoomsAction::Delete { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["rooms", "delete"]));
            };
            let status = rooms.delete(&id).await?;
            ctx.output.status(status)?;
        }
    }

    Ok(Outcome::Done)
}
