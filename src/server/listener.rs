use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::context;
use crate::server::handler::Handler;
use crate::server::waitgroup::WaitGroup;

/// Binds `addr` and dispatches connections until `shutdown` resolves.
pub async fn run<H, S>(addr: &str, handler: H, shutdown: S) -> anyhow::Result<()>
where
    H: Handler,
    S: Future<Output = ()>,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    serve(listener, handler, shutdown).await
}

/// Accept loop over an already-bound listener.
///
/// One spawned task per connection; a connection's failure is logged and
/// never reaches the accept loop or its siblings. When `shutdown` resolves
/// or accept fails, dispatch ends and the call blocks until every in-flight
/// connection has drained.
pub async fn serve<H, S>(listener: TcpListener, handler: H, shutdown: S) -> anyhow::Result<()>
where
    H: Handler,
    S: Future<Output = ()>,
{
    let connections = WaitGroup::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (socket, peer) = match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        tracing::error!("Accept failed: {}", e);
                        break;
                    }
                };
                info!("Accepted connection from {}", peer);

                let guard = connections.guard();
                let handler = handler.clone();
                tokio::spawn(async move {
                    let _guard = guard;
                    if let Err(e) = context::serve_connection(socket, handler).await {
                        tracing::error!("Connection error from {}: {}", peer, e);
                    }
                });
            }

            _ = &mut shutdown => {
                info!("Draining in-flight connections");
                break;
            }
        }
    }

    connections.wait().await;
    Ok(())
}
