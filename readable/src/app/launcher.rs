// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AppState,
            CLICommand,
            Comment,
            CommentEdit,
            CommonResult,
            Dispatcher,
            HttpApiClient,
            NewComment,
            NewPost,
            Post,
            PostEdit,
            ReadableApi,
            ReadableConfig,
            Selectors,
            create_comment,
            create_post,
            create_store,
            delete_comment,
            delete_post,
            edit_comment,
            edit_post,
            fetch_categories,
            fetch_comments,
            fetch_post,
            get_post_by_id,
            set_posts_sort_option,
            sync_route_to_state,
            vote_on_comment,
            vote_on_post};

use super::render;

/// The store swallows failed calls, and only flags them. These are what a command
/// reports when a call did not go through.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CommandErrorCouldNot {
    #[error("🔍 Could not find post {0}")]
    FindPost(String),

    #[error("🔍 Could not find comment {0}")]
    FindComment(String),

    #[error("📝 Could not create the post")]
    CreatePost,

    #[error("💬 Could not create the comment")]
    CreateComment,

    #[error("👍 The vote was not accepted")]
    Vote,

    #[error("✏️ The edit was not accepted")]
    Edit,

    #[error("🗑️ Could not delete {0}")]
    Delete(String),
}

/// Runs `command` against the server at `config.api_url` and prints the result.
pub async fn run_command(command: CLICommand, config: ReadableConfig) -> CommonResult<()> {
    let api = HttpApiClient::try_new(config.api_url, config.token)?;
    let store = create_store().await;
    let output = run_command_with(command, &store, &api).await?;
    println!("{output}");
    Ok(())
}

/// Runs `command` and returns what it would print.
pub async fn run_command_with<D, Api>(
    command: CLICommand,
    dispatcher: &D,
    api: &Api,
) -> CommonResult<String>
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    match command {
        CLICommand::Browse { path, sort } => {
            fetch_categories(dispatcher, api).await;
            if let Some(sort_option) = sort {
                dispatcher
                    .dispatch(set_posts_sort_option(Some(sort_option)))
                    .await;
            }
            let route = sync_route_to_state(dispatcher, api, &path).await;
            let state = dispatcher.get_state().await;
            Ok(render::render_page(&route, &state, &Selectors::default()))
        }

        CLICommand::Vote {
            post: Some(post_id),
            delta,
            ..
        } => {
            let before = load_post(dispatcher, api, &post_id).await?;
            vote_on_post(dispatcher, api, &before, delta).await;
            let after = find_post(&dispatcher.get_state().await, &post_id)?;
            if after.vote_score == before.vote_score {
                return Err(CommandErrorCouldNot::Vote.into());
            }
            Ok(render::render_post_line(&after))
        }

        CLICommand::Vote {
            comment: Some(comment_id),
            delta,
            ..
        } => {
            let before = load_comment(dispatcher, api, &comment_id).await?;
            vote_on_comment(dispatcher, api, &before, delta).await;
            let after = find_comment(&dispatcher.get_state().await, &comment_id)?;
            if after.vote_score == before.vote_score {
                return Err(CommandErrorCouldNot::Vote.into());
            }
            Ok(render::render_comment_line(&after))
        }

        CLICommand::Vote { .. } => Err(CommandErrorCouldNot::Vote.into()),

        CLICommand::CreatePost {
            category,
            title,
            body,
            author,
        } => {
            let data = NewPost {
                title,
                body,
                author,
                category,
            };
            let post = create_post(dispatcher, api, data)
                .await
                .ok_or(CommandErrorCouldNot::CreatePost)?;
            Ok(render::render_post_line(&post))
        }

        CLICommand::EditPost { id, title, body } => {
            let before = load_post(dispatcher, api, &id).await?;
            if !edit_post(dispatcher, api, &before, PostEdit { title, body }).await {
                return Err(CommandErrorCouldNot::Edit.into());
            }
            let after = find_post(&dispatcher.get_state().await, &id)?;
            Ok(render::render_post_line(&after))
        }

        CLICommand::DeletePost { id } => {
            let post = load_post(dispatcher, api, &id).await?;
            delete_post(dispatcher, api, &post).await;
            if get_post_by_id(&dispatcher.get_state().await, &id).is_some() {
                return Err(CommandErrorCouldNot::Delete(id).into());
            }
            Ok(format!("Deleted post {id}"))
        }

        CLICommand::Comment { post, body, author } => {
            let comment = create_comment(dispatcher, api, &post, NewComment { body, author })
                .await
                .ok_or(CommandErrorCouldNot::CreateComment)?;
            Ok(render::render_comment_line(&comment))
        }

        CLICommand::EditComment { id, body } => {
            let before = load_comment(dispatcher, api, &id).await?;
            let data = CommentEdit { body: Some(body) };
            if !edit_comment(dispatcher, api, &before, data).await {
                return Err(CommandErrorCouldNot::Edit.into());
            }
            let after = find_comment(&dispatcher.get_state().await, &id)?;
            Ok(render::render_comment_line(&after))
        }

        CLICommand::DeleteComment { id } => {
            let comment = load_comment(dispatcher, api, &id).await?;
            delete_comment(dispatcher, api, &comment).await;
            if find_comment(&dispatcher.get_state().await, &id).is_ok() {
                return Err(CommandErrorCouldNot::Delete(id).into());
            }
            Ok(format!("Deleted comment {id}"))
        }
    }
}

/// Puts the post in the store (unless it is there already) and returns it.
async fn load_post<D, Api>(dispatcher: &D, api: &Api, id: &str) -> CommonResult<Post>
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    if let Ok(post) = find_post(&dispatcher.get_state().await, id) {
        return Ok(post);
    }
    fetch_post(dispatcher, api, id).await;
    find_post(&dispatcher.get_state().await, id)
}

/// Loads all the comments of the comment's post, so the comment ends up in the store
/// along with its siblings.
async fn load_comment<D, Api>(dispatcher: &D, api: &Api, id: &str) -> CommonResult<Comment>
where
    D: Dispatcher + ?Sized,
    Api: ReadableApi + ?Sized,
{
    let comment = api.get_comment(id).await?;
    fetch_comments(dispatcher, api, &comment.parent_id).await;
    find_comment(&dispatcher.get_state().await, id)
}

fn find_post(state: &AppState, id: &str) -> CommonResult<Post> {
    get_post_by_id(state, id)
        .cloned()
        .ok_or_else(|| CommandErrorCouldNot::FindPost(id.into()).into())
}

fn find_comment(state: &AppState, id: &str) -> CommonResult<Comment> {
    state
        .comments
        .by_id
        .get(id)
        .cloned()
        .ok_or_else(|| CommandErrorCouldNot::FindComment(id.into()).into())
}
