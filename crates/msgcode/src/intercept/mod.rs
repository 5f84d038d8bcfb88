//! Interceptors: hooks that run around formatting.

mod builtin;
mod pipeline;

pub use builtin::{CorrelationIdInterceptor, MetadataInterceptor, TracingInterceptor};
pub use pipeline::{Intercepted, InterceptorPipeline};

use crate::types::Message;

/// A hook pair invoked around intercepted formatting.
///
/// Both hooks default to returning the message unchanged. For ordering
/// guarantees to mean anything, hooks should only transform the message they are
/// given; side effects such as logging are not ordered beyond invocation order.
pub trait Interceptor: Send + Sync {
    /// Runs before fields are extracted; the returned message is what gets rendered.
    fn on_before_format(&self, message: Message) -> Message {
        message
    }

    /// Runs after output has been produced, over the rendered message.
    fn on_after_format(&self, message: Message) -> Message {
        message
    }
}
