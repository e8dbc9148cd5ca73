use std::future::Future;
use futures::future::{abortable, AbortHandle};

/// Aborts the wrapped task when dropped.
///
/// Views keep one of these for each fetch they start; once the view is torn
/// down the guard goes with it and a late response is never applied.
pub struct FetchGuard(AbortHandle);

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub fn spawn_scoped<F>(future: F) -> FetchGuard
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(future);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = task.await;
    });
    FetchGuard(handle)
}
