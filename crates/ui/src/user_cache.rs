use dioxus::prelude::*;
use services::UserSnapshot;

use crate::context::AppContext;

/// Reactive profile/leaderboard/ledger snapshot shared across views.
///
/// Views read it for the header stats and progress bars; any action that
/// moves coins or progress calls [`UserCache::refresh`] afterwards. A failed
/// refresh keeps the previous snapshot on screen rather than blanking it.
#[derive(Clone, Copy)]
pub struct UserCache {
    snapshot: Signal<Option<UserSnapshot>>,
    loading: Signal<bool>,
}

impl UserCache {
    fn new() -> Self {
        Self {
            snapshot: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<UserSnapshot> {
        self.snapshot.read().clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub async fn refresh(mut self, ctx: &AppContext) {
        let Some(session) = ctx.session() else {
            self.snapshot.set(None);
            self.loading.set(false);
            return;
        };
        if let Ok(snapshot) = ctx.users().snapshot(&session).await {
            self.snapshot.set(Some(snapshot));
        }
        self.loading.set(false);
    }

    pub fn clear(mut self) {
        self.snapshot.set(None);
        self.loading.set(false);
    }
}

/// Provide the cache to the routed views and kick off the first load.
pub fn use_user_cache_provider() -> UserCache {
    let ctx = use_context::<AppContext>();
    let cache = use_context_provider(UserCache::new);
    use_future(move || {
        let ctx = ctx.clone();
        async move { cache.refresh(&ctx).await }
    });
    cache
}
