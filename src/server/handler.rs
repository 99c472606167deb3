use std::future::Future;

use crate::http::context::Context;

/// Per-connection request handler.
///
/// The dispatcher clones the handler into every connection task and calls
/// it with the connection's [`Context`]. Implemented automatically for
/// cloneable async closures, so applications pass a capturing closure
/// rather than implementing the trait by hand:
///
/// ```ignore
/// let state = Arc::new(cfg);
/// let handler = move |ctx: Context| routes::handle(state.clone(), ctx);
/// server::listener::run(&addr, handler, shutdown).await?;
/// ```
pub trait Handler: Clone + Send + 'static {
    fn handle(&self, ctx: Context) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<F, Fut> Handler for F
where
    F: Fn(Context) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    fn handle(&self, ctx: Context) -> impl Future<Output = anyhow::Result<()>> + Send {
        (self)(ctx)
    }
}
