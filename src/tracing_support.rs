//! Tracing support for timing the analyses.
//!
//! Every algorithm entry point opens an `info_span!`.  When the `tracing`
//! feature is enabled, [`init_tracing`] installs a layer that accumulates the
//! wall time spent under each span name, grouped by [`TimingScope`].
//! [`method_timings`] returns the totals and [`dump_method_timings`] prints
//! them.  Without the feature the same API exists and records nothing.

use std::time::Duration;

/// Groups span timings so that checking results does not pollute the
/// timings of the analyses themselves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TimingScope {
    Analysis,
    Verification,
}

/// Accumulated time spent in every span with the same name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanTiming {
    pub scope: TimingScope,
    pub name: &'static str,
    pub total: Duration,
    pub calls: usize,
}

/// Prints the result of [`method_timings`] to stderr, slowest first within
/// each scope.
pub fn dump_method_timings() {
    let timings = method_timings();
    for scope in [TimingScope::Analysis, TimingScope::Verification] {
        eprintln!("{scope:?} timings (desc):");
        for timing in timings.iter().filter(|t| t.scope == scope) {
            eprintln!("  {}: {:?} ({}x)", timing.name, timing.total, timing.calls);
        }
    }
}

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::{Cell, RefCell},
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::{SpanTiming, TimingScope};

    thread_local! {
        static TOTALS: RefCell<BTreeMap<(TimingScope, &'static str), (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
        static CURRENT_SCOPE: Cell<TimingScope> = const { Cell::new(TimingScope::Analysis) };
    }

    pub struct TimingScopeGuard {
        previous: TimingScope,
    }

    impl Drop for TimingScopeGuard {
        fn drop(&mut self) {
            CURRENT_SCOPE.with(|scope| scope.set(self.previous));
        }
    }

    /// Attributes spans closed on this thread to `scope` until the guard is
    /// dropped.
    pub fn set_timing_scope(scope: TimingScope) -> TimingScopeGuard {
        let previous = CURRENT_SCOPE.with(|current| current.replace(scope));
        TimingScopeGuard { previous }
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(elapsed) = span.extensions().get::<Instant>().map(Instant::elapsed) else {
                return;
            };
            let key = (CURRENT_SCOPE.with(Cell::get), span.metadata().name());
            TOTALS.with(|totals| {
                let mut totals = totals.borrow_mut();
                let entry = totals.entry(key).or_insert((Duration::ZERO, 0));
                entry.0 += elapsed;
                entry.1 += 1;
            });
        }
    }

    /// Installs the timing layer as the global subscriber.  Later calls, and
    /// calls made after another subscriber was installed, do nothing.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    pub fn reset_method_timings() {
        init_tracing();
        TOTALS.with(|totals| totals.borrow_mut().clear());
    }

    /// Returns the timings recorded on this thread, grouped by scope and
    /// sorted by descending total time within each scope.
    pub fn method_timings() -> Vec<SpanTiming> {
        let mut timings: Vec<SpanTiming> = TOTALS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&(scope, name), &(total, calls))| SpanTiming {
                    scope,
                    name,
                    total,
                    calls,
                })
                .collect()
        });
        timings.sort_by(|a, b| a.scope.cmp(&b.scope).then(b.total.cmp(&a.total)));
        timings
    }

    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::{SpanTiming, TimingScope};

    pub struct TimingScopeGuard;

    pub fn set_timing_scope(_scope: TimingScope) -> TimingScopeGuard {
        TimingScopeGuard
    }

    pub fn init_tracing() {}

    pub fn reset_method_timings() {}

    pub fn method_timings() -> Vec<SpanTiming> {
        Vec::new()
    }

    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
