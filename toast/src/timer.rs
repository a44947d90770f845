use std::sync::Arc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task once after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Timer used by [`crate::ToastQueue::new`] on the current platform
pub fn default_scheduler() -> Arc<dyn Scheduler> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(GlooScheduler)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(TokioScheduler)
    }
}

/// Spawns a sleeping task on the ambient tokio runtime.
/// Must be used from within a runtime context.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Browser `setTimeout` via gloo
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        // Nothing holds on to the handle, so let it run to completion
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
