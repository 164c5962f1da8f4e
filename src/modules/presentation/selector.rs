use crate::modules::content::domain::entities::{PastProject, Project, RowId};

pub trait Identified {
    fn row_id(&self) -> &RowId;
}

impl Identified for PastProject {
    fn row_id(&self) -> &RowId {
        &self.id
    }
}

impl Identified for Project {
    fn row_id(&self) -> &RowId {
        &self.id
    }
}

#[derive(Debug, PartialEq)]
pub enum SelectorView<'a, T> {
    List(&'a [T]),
    Detail(&'a T),
    /// The active id matches none of the items.
    Missing(&'a RowId),
}

/// List that swaps to a single item's detail while one is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterDetail<T> {
    items: Vec<T>,
    active_id: Option<RowId>,
}

impl<T: Identified> MasterDetail<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            active_id: None,
        }
    }

    pub fn with_active(mut self, active_id: Option<RowId>) -> Self {
        self.active_id = active_id;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items may arrive after a selection was made; the selection is kept.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn active_id(&self) -> Option<&RowId> {
        self.active_id.as_ref()
    }

    pub fn select(&mut self, id: RowId) {
        self.active_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.active_id = None;
    }

    pub fn is_active(&self, item: &T) -> bool {
        self.active_id.as_ref() == Some(item.row_id())
    }

    pub fn view(&self) -> SelectorView<'_, T> {
        match &self.active_id {
            None => SelectorView::List(&self.items),
            Some(id) => self
                .items
                .iter()
                .find(|item| item.row_id() == id)
                .map(SelectorView::Detail)
                .unwrap_or(SelectorView::Missing(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn past(id: &str) -> PastProject {
        PastProject {
            id: RowId::from(id),
            title: format!("Project {id}"),
            description: Some(format!("About {id}")),
            tech_stack: vec!["Rust".into()],
            repo_url: None,
            demo_url: None,
            screenshots: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn no_selection_lists_every_item() {
        let selector = MasterDetail::new(vec![past("a"), past("b"), past("c")]);

        match selector.view() {
            SelectorView::List(items) => assert_eq!(items.len(), 3),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn selecting_existing_id_shows_that_item() {
        let mut selector = MasterDetail::new(vec![past("a"), past("b")]);
        selector.select(RowId::from("b"));

        match selector.view() {
            SelectorView::Detail(item) => {
                assert_eq!(item.id, RowId::from("b"));
                assert_eq!(item.description.as_deref(), Some("About b"));
            }
            other => panic!("expected detail, got {other:?}"),
        }
        assert!(selector.is_active(&past("b")));
        assert!(!selector.is_active(&past("a")));
    }

    #[test]
    fn selecting_unknown_id_is_missing_not_a_panic() {
        let selector = MasterDetail::new(vec![past("a")]).with_active(Some(RowId::from("zzz")));
        assert_eq!(selector.view(), SelectorView::Missing(&RowId::from("zzz")));
    }

    #[test]
    fn clear_returns_to_list() {
        let mut selector = MasterDetail::new(vec![past("a")]);
        selector.select(RowId::from("a"));
        selector.clear();

        assert!(selector.active_id().is_none());
        assert!(matches!(selector.view(), SelectorView::List(_)));
    }

    #[test]
    fn late_items_resolve_an_earlier_selection() {
        let mut selector: MasterDetail<PastProject> = MasterDetail::new(vec![]);
        selector.select(RowId::from("a"));
        assert!(matches!(selector.view(), SelectorView::Missing(_)));

        selector.set_items(vec![past("a")]);
        assert!(matches!(selector.view(), SelectorView::Detail(_)));
    }
}
