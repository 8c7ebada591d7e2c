use std::io::Write;

use super::{Context, Outcome};
use crate::cli::messages::MessagesAction;
use crate::client::messages::{CreateMessageRequest, ListMessagesQuery};
use crate::client::non_empty;
use crate::error::Result;

/// Message body fields chosen from the flags; only the first present of html,
/// markdown and text is sent.
fn body(
    html: Option<String>,
    markdown: Option<String>,
    text: Option<String>,
) -> (Option<String>, Option<String>, Option<String>) {
    if let Some(html) = non_empty(html) {
        (Some(html), None, None)
    } else if let Some(markdown) = non_empty(markdown) {
        (None, Some(markdown), None)
    } else {
        (None, None, non_empty(text))
    }
}

pub(super) async fn run<W: Write>(
    action: MessagesAction,
    ctx: &mut Context<'_, W>,
) -> Result<Outcome> {
    let messages = ctx.client.messages();

    match action {
        MessagesAction::List {
            room,
            mentioned_people,
            before,
            before_message,
        } => {
            let query = ListMessagesQuery {
                room_id: non_empty(room),
                mentioned_people: non_empty(mentioned_people),
                before: non_empty(before),
                before_message: non_empty(before_message),
                max: Some(ctx.max),
            };
            ctx.output.render(&messages.list(&query).await?)?;
        }
        MessagesAction::Create {
            room,
            to_person_id,
            to_person_email,
            html,
            markdown,
            text,
        } => {
            let (html, markdown, text) = body(html, markdown, text);
            let message = messages
                .create(&CreateMessageRequest {
                    room_id: non_empty(room),
                    to_person_id: non_empty(to_person_id),
                    to_person_email: non_empty(to_person_email),
                    text,
                    markdown,
                    html,
                })
                .await?;
            ctx.output.render(&message)?;
        }
        MessagesAction::Get { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["messages", "get"]));
            };
            ctx.output.render(&messages.get(&id).await?)?;
        }
        MessagesAction::Delete { id } => {
            let Some(id) = non_empty(id) else {
                return Ok(Outcome::ShowHelp(&["messages", "delete"]));
            };
            let status = messages.delete(&id).await?;
            ctx.output.status(status)?;
        }
    }

    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_html_wins() {
        assert_eq!(body(s("<b>hi</b>"), s("**hi**"), s("hi")), (s("<b>hi</b>"), None, None));
    }

    #[test]
    fn test_markdown_before_text() {
        assert_eq!(body(None, s("**hi**"), s("hi")), (None, s("**hi**"), None));
        assert_eq!(body(s(""), s("**hi**"), None), (None, s("**hi**"), None));
    }

    #[test]
    fn test_text_or_nothing() {
        assert_eq!(body(None, None, s("hi")), (None, None, s("hi")));
        assert_eq!(body(None, None, None), (None, None, None));
    }
}
