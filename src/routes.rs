//! Application routing layered on top of the protocol core.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::http::context::Context;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder};

/// Routes a parsed request and writes the response.
pub async fn handle(cfg: Arc<Config>, ctx: Context) -> anyhow::Result<()> {
    let response = route(&cfg, ctx.request()).await;
    ctx.respond(response).await?;
    Ok(())
}

async fn route(cfg: &Config, req: &Request) -> Response {
    match (&req.method, req.path.as_str()) {
        (Method::GET, "/") => ResponseBuilder::new(200).build(),

        (Method::GET, path) if path.starts_with("/echo/") => {
            let message = &path["/echo/".len()..];
            text_plain(message.as_bytes().to_vec())
        }

        (Method::GET, "/user-agent") => match req.header("User-Agent") {
            Some(agent) => text_plain(agent.as_bytes().to_vec()),
            None => ResponseBuilder::new(400).build(),
        },

        (Method::GET, path) if path.starts_with("/files/") => {
            read_file(cfg, &path["/files/".len()..]).await
        }

        (Method::POST, path) if path.starts_with("/files/") => {
            write_file(cfg, &path["/files/".len()..], &req.body).await
        }

        _ => Response::not_found(),
    }
}

fn text_plain(body: Vec<u8>) -> Response {
    ResponseBuilder::new(200)
        .header("Content-Type", "text/plain")
        .body(body)
        .build()
}

async fn read_file(cfg: &Config, name: &str) -> Response {
    let Some(path) = resolve(cfg, name) else {
        return Response::not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(contents) => ResponseBuilder::new(200)
            .header("Content-Type", "application/octet-stream")
            .body(contents)
            .build(),
        Err(_) => Response::not_found(),
    }
}

async fn write_file(cfg: &Config, name: &str, body: &[u8]) -> Response {
    let Some(path) = resolve(cfg, name) else {
        return Response::not_found();
    };

    match tokio::fs::write(&path, body).await {
        Ok(()) => Response::created(),
        Err(e) => {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            Response::internal_error()
        }
    }
}

/// Maps a request file name into the configured root directory. Names that
/// would escape the root (absolute paths, `..` components) resolve to None.
fn resolve(cfg: &Config, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if name.is_empty() || escapes {
        return None;
    }
    Some(cfg.files.root_dir.join(relative))
}
