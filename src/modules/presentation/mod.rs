//! UI state for the site pages, independent of any rendering framework.
//!
//! Everything here is driven by explicit calls and [`events::UiEvent`]s:
//! observable stores hold the state, RAII guards own listener and
//! scroll-lock lifetimes.

pub mod events;
pub mod manager;
pub mod modal;
pub mod motion;
pub mod nav_menu;
pub mod parallax;
pub mod scroll;
pub mod selector;
pub mod store;

pub use events::{EventHub, EventKind, ListenerGuard, PointerRegion, UiEvent};
pub use manager::{PresentationManager, PresentationStores, LOADING_BOUNCE};
pub use modal::{Modal, ModalClick, ScrollLock, ScrollLockGuard};
pub use motion::{transform, Immediate, MotionState, SmoothedValue, Smoothing, SpringSmoothing};
pub use nav_menu::{MenuState, NavMenu};
pub use parallax::{Channel, ParallaxFrame, ParallaxState, SectionLayout};
pub use scroll::{
    ScrollOffset, ScrollToTopAnimation, SectionBounds, Viewport, MOBILE_BREAKPOINT,
    SCROLL_TOP_THRESHOLD,
};
pub use selector::{Identified, MasterDetail, SelectorView};
pub use store::Store;
