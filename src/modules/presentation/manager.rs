use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, info};

use super::events::{EventHub, EventKind, ListenerGuard, UiEvent};
use super::motion::{Smoothing, SpringSmoothing};
use super::parallax::{ParallaxFrame, ParallaxState, SectionLayout};
use super::scroll::{ScrollToTopAnimation, Viewport};
use super::store::Store;
use crate::modules::content::application::ports::incoming::use_cases::GetHomeSectionsUseCase;
use crate::modules::content::domain::entities::{About, Hero, Post, Project, Skill};

/// How long the loading logo bounces after mount. Purely cosmetic: it is not
/// tied to any fetch finishing.
pub const LOADING_BOUNCE: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Default)]
pub struct PresentationStores {
    pub hero: Store<Option<Hero>>,
    pub about: Store<Option<About>>,
    pub skills: Store<Vec<Skill>>,
    pub projects: Store<Vec<Project>>,
    pub posts: Store<Vec<Post>>,
    pub loading: Store<bool>,
    pub is_mobile: Store<bool>,
    pub scrolled_past_threshold: Store<bool>,
    pub parallax: Store<ParallaxFrame>,
}

struct ViewState {
    viewport: Viewport,
    layout: SectionLayout,
    parallax: ParallaxState,
}

/// Dropping this detaches the listeners and aborts the loading timer and
/// every section task still in flight.
struct Mounted {
    _listeners: Vec<ListenerGuard>,
    _tasks: JoinSet<()>,
}

/// Home page state: section rows, loading flag, viewport flags and parallax
/// offsets, each in its own [`Store`].
///
/// Every mount starts a new generation. Section results that arrive after
/// an unmount (or a remount) belong to an older generation and are dropped.
pub struct PresentationManager {
    sections: Arc<dyn GetHomeSectionsUseCase>,
    hub: EventHub,
    stores: PresentationStores,
    view: Arc<Mutex<ViewState>>,
    generation: Arc<AtomicU64>,
    mounted: Option<Mounted>,
}

impl PresentationManager {
    pub fn new(sections: Arc<dyn GetHomeSectionsUseCase>, hub: EventHub, viewport: Viewport) -> Self {
        let layout = SectionLayout::new();
        let parallax = ParallaxState::new(Arc::new(SpringSmoothing::default()), &viewport, &layout);

        let stores = PresentationStores::default();
        stores.is_mobile.set(viewport.is_mobile());
        stores.scrolled_past_threshold.set(viewport.scrolled_past_threshold());
        stores.parallax.set(parallax.frame());

        Self {
            sections,
            hub,
            stores,
            view: Arc::new(Mutex::new(ViewState {
                viewport,
                layout,
                parallax,
            })),
            generation: Arc::new(AtomicU64::new(0)),
            mounted: None,
        }
    }

    pub fn with_smoothing(self, smoothing: Arc<dyn Smoothing>) -> Self {
        {
            let mut view = lock(&self.view);
            let parallax = ParallaxState::new(smoothing, &view.viewport, &view.layout);
            self.stores.parallax.set(parallax.frame());
            view.parallax = parallax;
        }
        self
    }

    pub fn stores(&self) -> &PresentationStores {
        &self.stores
    }

    pub fn viewport(&self) -> Viewport {
        lock(&self.view).viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Starts the loading bounce, requests every section and attaches the
    /// scroll and resize listeners. Mounting twice replaces the first mount.
    ///
    /// Must be called from within a Tokio runtime; the bounce timer and the
    /// section requests are spawned onto it.
    pub fn mount(&mut self) {
        self.unmount();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, "Mounting home page state");

        let mut tasks = JoinSet::new();

        self.stores.loading.set(true);
        {
            let loading = self.stores.loading.clone();
            let current = Arc::clone(&self.generation);
            tasks.spawn(async move {
                tokio::time::sleep(LOADING_BOUNCE).await;
                if current.load(Ordering::SeqCst) == generation {
                    loading.set(false);
                }
            });
        }

        self.spawn_section(&mut tasks, generation, self.stores.hero.clone(), |s| async move {
            s.hero().await
        });
        self.spawn_section(&mut tasks, generation, self.stores.about.clone(), |s| async move {
            s.about().await
        });
        self.spawn_section(&mut tasks, generation, self.stores.skills.clone(), |s| async move {
            s.skills().await
        });
        self.spawn_section(&mut tasks, generation, self.stores.projects.clone(), |s| async move {
            s.projects().await
        });
        self.spawn_section(&mut tasks, generation, self.stores.posts.clone(), |s| async move {
            s.posts().await
        });

        {
            let view = lock(&self.view);
            self.stores.is_mobile.set(view.viewport.is_mobile());
            self.stores
                .scrolled_past_threshold
                .set(view.viewport.scrolled_past_threshold());
        }

        self.mounted = Some(Mounted {
            _listeners: vec![self.on_scroll(), self.on_resize()],
            _tasks: tasks,
        });
    }

    /// Detaches listeners and cancels in-flight section requests.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            let retired = self.generation.fetch_add(1, Ordering::SeqCst);
            debug!(generation = retired, "Unmounting home page state");
            drop(mounted);
        }
    }

    pub fn set_layout(&self, layout: SectionLayout) {
        lock(&self.view).layout = layout;
    }

    /// Advances the parallax springs by one frame and publishes the result.
    pub fn tick(&self, dt: Duration) -> ParallaxFrame {
        let mut view = lock(&self.view);
        let ViewState {
            viewport,
            layout,
            parallax,
        } = &mut *view;

        let frame = parallax.tick(viewport, layout, dt);
        self.stores.parallax.set(frame);
        frame
    }

    pub fn scroll_to_top(&self) -> ScrollToTopAnimation {
        ScrollToTopAnimation::new(self.viewport().scroll_y)
    }

    fn spawn_section<T, F, Fut>(
        &self,
        tasks: &mut JoinSet<()>,
        generation: u64,
        store: Store<T>,
        load: F,
    ) where
        T: PartialEq + Send + Sync + 'static,
        F: FnOnce(Arc<dyn GetHomeSectionsUseCase>) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let current = Arc::clone(&self.generation);
        let pending = load(Arc::clone(&self.sections));

        tasks.spawn(async move {
            let value = pending.await;
            if current.load(Ordering::SeqCst) == generation {
                store.set(value);
            } else {
                debug!(generation, "Discarding section result from a retired mount");
            }
        });
    }

    fn on_scroll(&self) -> ListenerGuard {
        let view = Arc::clone(&self.view);
        let scrolled = self.stores.scrolled_past_threshold.clone();

        self.hub.add_listener(EventKind::Scroll, move |event| {
            if let UiEvent::Scroll { scroll_y } = event {
                let mut view = lock(&view);
                view.viewport.scroll_y = *scroll_y;
                scrolled.set(view.viewport.scrolled_past_threshold());
            }
        })
    }

    fn on_resize(&self) -> ListenerGuard {
        let view = Arc::clone(&self.view);
        let is_mobile = self.stores.is_mobile.clone();

        self.hub.add_listener(EventKind::Resize, move |event| {
            if let UiEvent::Resize { width, height } = event {
                let mut view = lock(&view);
                view.viewport.width = *width;
                view.viewport.height = *height;
                is_mobile.set(view.viewport.is_mobile());
            }
        })
    }
}

impl Drop for PresentationManager {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn lock(view: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}
