use super::events::{EventHub, EventKind, ListenerGuard, PointerRegion, UiEvent};
use super::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Dropdown navigation. Closes on a pointer-down anywhere outside the
/// trigger and the menu itself.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    state: Store<MenuState>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Store<MenuState> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == MenuState::Open
    }

    /// Trigger button press.
    pub fn toggle(&self) {
        self.state.update(|s| {
            *s = match *s {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            }
        });
    }

    pub fn close(&self) {
        self.state.set(MenuState::Closed);
    }

    pub fn handle_pointer_down(&self, region: PointerRegion) {
        if region == PointerRegion::Page {
            self.close();
        }
    }

    /// Attaches the outside-click listener for as long as the guard lives.
    pub fn mount(&self, hub: &EventHub) -> ListenerGuard {
        let menu = self.clone();
        hub.add_listener(EventKind::PointerDown, move |event| {
            if let UiEvent::PointerDown { region } = event {
                menu.handle_pointer_down(*region);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(hub: &EventHub, region: PointerRegion) {
        hub.dispatch(UiEvent::PointerDown { region });
    }

    #[test]
    fn starts_closed_and_toggles() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_pointer_down_closes_open_menu() {
        let hub = EventHub::new();
        let menu = NavMenu::new();
        let _mounted = menu.mount(&hub);

        menu.toggle();
        pointer(&hub, PointerRegion::Page);

        assert_eq!(menu.state().get(), MenuState::Closed);
    }

    #[test]
    fn pointer_down_inside_menu_or_trigger_keeps_it_open() {
        let hub = EventHub::new();
        let menu = NavMenu::new();
        let _mounted = menu.mount(&hub);

        menu.toggle();
        pointer(&hub, PointerRegion::NavMenu);
        assert!(menu.is_open());

        pointer(&hub, PointerRegion::NavTrigger);
        assert!(menu.is_open());
    }

    #[test]
    fn outside_pointer_down_while_closed_does_not_notify() {
        let hub = EventHub::new();
        let menu = NavMenu::new();
        let _mounted = menu.mount(&hub);
        let mut rx = menu.state().subscribe();

        pointer(&hub, PointerRegion::Page);

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn unmounted_menu_ignores_pointer_events() {
        let hub = EventHub::new();
        let menu = NavMenu::new();
        let mounted = menu.mount(&hub);
        drop(mounted);

        menu.toggle();
        pointer(&hub, PointerRegion::Page);

        assert!(menu.is_open());
        assert_eq!(hub.listener_count(EventKind::PointerDown), 0);
    }

    #[test]
    fn remount_does_not_duplicate_listener() {
        let hub = EventHub::new();
        let menu = NavMenu::new();

        let first = menu.mount(&hub);
        drop(first);
        let _second = menu.mount(&hub);

        assert_eq!(hub.listener_count(EventKind::PointerDown), 1);
    }
}
