// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand};

use crate::SortOption;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Parser)]
#[command(bin_name = "readable")]
#[command(about = "📰 Browse, write, and vote on Readable posts and comments")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CliArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        env = "READABLE_API_URL",
        default_value = DEFAULT_API_URL,
        help = "Base url of the Readable server"
    )]
    pub api_url: String,

    #[arg(
        global = true,
        long,
        help = "Client token to send, instead of the one saved in the config folder"
    )]
    pub token: Option<String>,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "File that logs are written to, when logging is enabled"
    )]
    pub log_file: String,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "📰 Show the page at PATH: `/`, `/:category`, or `/:category/:post_id`\n💡 Eg: `readable browse /react --sort=-timestamp`"
    )]
    Browse {
        #[arg(default_value = "/")]
        path: String,

        #[arg(
            long,
            short,
            help = "Field to sort posts by, prefix with `-` for descending. Eg: `-voteScore`, `title`"
        )]
        sort: Option<SortOption>,
    },

    #[clap(about = "👍 Vote on a post or a comment. Positive DELTA is up, anything else is down")]
    Vote {
        #[arg(long, conflicts_with = "comment", required_unless_present = "comment")]
        post: Option<String>,

        #[arg(long)]
        comment: Option<String>,

        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    #[clap(about = "📝 Write a new post")]
    CreatePost {
        #[arg(long)]
        category: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        author: String,
    },

    #[clap(about = "✏️ Change the title or body of a post")]
    EditPost {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },

    #[clap(about = "🗑️ Delete a post, and its comments")]
    DeletePost { id: String },

    #[clap(about = "💬 Comment on a post")]
    Comment {
        #[arg(long)]
        post: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        author: String,
    },

    #[clap(about = "✏️ Change the body of a comment")]
    EditComment {
        id: String,
        #[arg(long)]
        body: String,
    },

    #[clap(about = "🗑️ Delete a comment")]
    DeleteComment { id: String },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_browse_defaults_to_root() {
        let it = CliArg::try_parse_from(["readable", "browse"]).unwrap();
        assert_eq!(
            it.command,
            CLICommand::Browse {
                path: "/".into(),
                sort: None
            }
        );
        assert!(!it.global_options.enable_logging);
        assert_eq!(it.global_options.log_file, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_browse_with_sort() {
        let it =
            CliArg::try_parse_from(["readable", "browse", "/react", "--sort=-timestamp"])
                .unwrap();
        assert_eq!(
            it.command,
            CLICommand::Browse {
                path: "/react".into(),
                sort: Some(SortOption::from_str("-timestamp").unwrap()),
            }
        );
    }

    #[test]
    fn test_vote_accepts_negative_delta() {
        let it = CliArg::try_parse_from(["readable", "vote", "--post", "p1", "-4"]).unwrap();
        assert_eq!(
            it.command,
            CLICommand::Vote {
                post: Some("p1".into()),
                comment: None,
                delta: -4
            }
        );
    }

    #[test]
    fn test_vote_needs_exactly_one_target() {
        assert!(CliArg::try_parse_from(["readable", "vote", "1"]).is_err());
        assert!(
            CliArg::try_parse_from([
                "readable", "vote", "--post", "p1", "--comment", "c1", "1"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let it = CliArg::try_parse_from([
            "readable",
            "delete-post",
            "p1",
            "-l",
            "--token",
            "abcd1234",
        ])
        .unwrap();
        assert!(it.global_options.enable_logging);
        assert_eq!(it.global_options.token.as_deref(), Some("abcd1234"));
    }
}
