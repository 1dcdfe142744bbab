use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use tgapi_core::{
    codec::{from_slice_with, Decode, Encode},
    config::CodecConfig,
    content::InputMessageContent,
    envelope::{decode_response, ApiResponse},
    inline::{InlineQueryResult, ResultKind},
    types::{Chat, ChatMember, File, Message, Update, User, WebhookInfo},
};

/// Decode Telegram Bot API JSON and print its canonical encoding.
#[derive(Parser, Debug)]
#[command(name = "tgapi", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a payload (or a whole response with `--envelope`).
    Decode {
        kind: Kind,

        /// Input is a `{"ok": ..., "result": ...}` response.
        #[arg(long)]
        envelope: bool,

        /// Overrides TGAPI_MAX_DEPTH.
        #[arg(long)]
        max_depth: Option<usize>,

        /// Read from this file instead of stdin.
        file: Option<PathBuf>,
    },
    /// List inline query result kinds with their wire tags.
    Kinds,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    User,
    Chat,
    Message,
    Update,
    Updates,
    InlineResult,
    InlineResults,
    Content,
    WebhookInfo,
    ChatMember,
    File,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tgapi_core::logging::init("tgapi")?;

    match Cli::parse().command {
        Command::Decode {
            kind,
            envelope,
            max_depth,
            file,
        } => {
            let mut cfg = CodecConfig::from_env()?;
            if let Some(depth) = max_depth {
                cfg = cfg.with_max_depth(depth);
                cfg.validate()?;
            }
            let input = read_input(file).await?;
            let out = decode(kind, &input, envelope, &cfg)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Kinds => {
            for kind in ResultKind::ALL {
                let marker = kind.file_id_marker().unwrap_or("-");
                println!("{:<16} {:<10} {marker}", format!("{kind:?}"), kind.tag());
            }
        }
    }

    Ok(())
}

async fn read_input(file: Option<PathBuf>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn decode(kind: Kind, input: &[u8], envelope: bool, cfg: &CodecConfig) -> anyhow::Result<Value> {
    match kind {
        Kind::User => canonical::<User>(input, envelope, cfg),
        Kind::Chat => canonical::<Chat>(input, envelope, cfg),
        Kind::Message => canonical::<Message>(input, envelope, cfg),
        Kind::Update => canonical::<Update>(input, envelope, cfg),
        Kind::Updates => canonical::<Vec<Update>>(input, envelope, cfg),
        Kind::InlineResult => canonical::<InlineQueryResult>(input, envelope, cfg),
        Kind::InlineResults => canonical::<Vec<InlineQueryResult>>(input, envelope, cfg),
        Kind::Content => canonical::<InputMessageContent>(input, envelope, cfg),
        Kind::WebhookInfo => canonical::<WebhookInfo>(input, envelope, cfg),
        Kind::ChatMember => canonical::<ChatMember>(input, envelope, cfg),
        Kind::File => canonical::<File>(input, envelope, cfg),
    }
}

fn canonical<T: Decode + Encode>(
    input: &[u8],
    envelope: bool,
    cfg: &CodecConfig,
) -> anyhow::Result<Value> {
    if !envelope {
        let value: T = from_slice_with(input, cfg).context("decoding payload")?;
        return Ok(value.encode());
    }

    match decode_response::<T>(input, cfg).context("decoding response")? {
        ApiResponse::Failure(err) => bail!("telegram api error: {err}"),
        ok => Ok(ok.encode()),
    }
}
