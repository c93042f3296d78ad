//! `postboard` command-line front end.
//!
//! Lists posts and comments through the optional `--user` / `--post`
//! scopes and creates rows. List output is one JSON object per line.

use anyhow::Context;
use clap::{Parser, Subcommand};
use postboard_core::db::open_db;
use postboard_core::{
    CommentService, CoreConfig, Page, PostService, SqliteCommentRepository, SqlitePostRepository,
    SqliteUserRepository, UserService,
};
use rusqlite::Connection;
use serde::Serialize;
use serde_json::to_string;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "postboard", version, about = "Posts, comments and their authors")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database file (overrides POSTBOARD_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Max rows for list commands
    #[arg(short, long, global = true)]
    limit: Option<u32>,

    /// Rows to skip for list commands
    #[arg(long, global = true, default_value_t = 0)]
    offset: u32,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Health check
    Ping,
    /// Print the core version
    Version,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },
    /// Manage comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },
    /// List posts, optionally only those of one user
    Posts {
        #[arg(long)]
        user: Option<i64>,
    },
    /// List comments, optionally only those on one post
    Comments {
        #[arg(long)]
        post: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
enum UserAction {
    Add { name: String },
    List,
}

#[derive(Debug, Subcommand)]
enum PostAction {
    Add {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
enum CommentAction {
    Add {
        #[arg(long)]
        post: i64,
        #[arg(long)]
        user: i64,
        body: String,
    },
    Delete { id: i64 },
}

fn main() {
    if let Err(error) = run() {
        eprintln!("postboard error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => {
            println!("{}", postboard_core::ping());
            return Ok(());
        }
        Command::Version => {
            println!("{}", postboard_core::core_version());
            return Ok(());
        }
        _ => {}
    }

    let mut config = CoreConfig::from_env().context("invalid POSTBOARD_* environment")?;
    if let Some(db) = cli.db.clone() {
        config.db_path = db;
    }
    config.init_logging().context("failed to start logging")?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let page = Page {
        limit: cli.limit,
        offset: cli.offset,
    };

    execute(&conn, cli.command, page)
}

fn execute(conn: &Connection, command: Command, page: Page) -> anyhow::Result<()> {
    match command {
        Command::Ping | Command::Version => Ok(()),
        Command::User { action } => {
            let users = UserService::new(SqliteUserRepository::try_new(conn)?);
            match action {
                UserAction::Add { name } => print_json(&users.create_user(name)?),
                UserAction::List => print_lines(&users.list_users(page)?),
            }
        }
        Command::Post { action } => {
            let posts = PostService::new(SqlitePostRepository::try_new(conn)?);
            match action {
                PostAction::Add { user, title, body } => {
                    print_json(&posts.create_post(user, title, body)?)
                }
                PostAction::Delete { id } => posts.delete_post(id).map_err(Into::into),
            }
        }
        Command::Comment { action } => {
            let comments = CommentService::new(SqliteCommentRepository::try_new(conn)?);
            match action {
                CommentAction::Add { post, user, body } => {
                    print_json(&comments.create_comment(post, user, body)?)
                }
                CommentAction::Delete { id } => comments.delete_comment(id).map_err(Into::into),
            }
        }
        Command::Posts { user } => {
            let posts = PostService::new(SqlitePostRepository::try_new(conn)?);
            print_lines(&posts.list_posts(user, page)?)
        }
        Command::Comments { post } => {
            let comments = CommentService::new(SqliteCommentRepository::try_new(conn)?);
            print_lines(&comments.list_comments(post, page)?)
        }
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", to_string(value)?);
    Ok(())
}

fn print_lines<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    for row in rows {
        print_json(row)?;
    }
    Ok(())
}
