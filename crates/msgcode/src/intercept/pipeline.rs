use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::intercept::Interceptor;
use crate::types::Message;

/// Output of a pipeline run together with the message the after hooks returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Intercepted<T> {
    pub output: T,
    pub message: Message,
}

/// An ordered list of interceptors.
///
/// Hooks run in registration order. Each run pins the list once, so a
/// registration racing with a run affects later runs only.
#[derive(Default)]
pub struct InterceptorPipeline {
    interceptors: ArcSwap<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor after those already registered.
    pub fn register(&self, interceptor: impl Interceptor + 'static) {
        self.register_arc(Arc::new(interceptor));
    }

    /// Append a shared interceptor.
    pub fn register_arc(&self, interceptor: Arc<dyn Interceptor>) {
        self.interceptors.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push(Arc::clone(&interceptor));
            next
        });
    }

    /// Remove every interceptor.
    pub fn clear(&self) {
        self.interceptors.store(Arc::new(Vec::new()));
    }

    pub fn len(&self) -> usize {
        self.interceptors.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.load().is_empty()
    }

    /// Run every before hook, `render`, then every after hook.
    ///
    /// Each before hook consumes the previous hook's output and `render` sees the
    /// final result. After hooks chain the same way, starting from the message
    /// that was rendered.
    pub fn run<T>(&self, message: Message, render: impl FnOnce(&Message) -> T) -> Intercepted<T> {
        let interceptors = self.interceptors.load_full();
        let message = interceptors
            .iter()
            .fold(message, |message, interceptor| {
                interceptor.on_before_format(message)
            });
        let output = render(&message);
        let message = interceptors
            .iter()
            .fold(message, |message, interceptor| {
                interceptor.on_after_format(message)
            });
        Intercepted { output, message }
    }
}
