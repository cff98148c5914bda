use crate::navigation::NavigationItem;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A named group in the navigation tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    pub name: String,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_in_content: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub make_nav_section: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub make_content_section: bool,
    pub items: Vec<NavigationItem>,
}
impl NavigationNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hide_in_content: false,
            make_nav_section: false,
            make_content_section: false,
            items: vec![],
        }
    }

    /// A group that gets both a nav entry and a content section.
    pub fn section(name: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self::new(name)
            .make_nav_section(true)
            .make_content_section(true)
            .items(items)
    }

    pub fn hide_in_content(mut self, hide_in_content: bool) -> Self {
        self.hide_in_content = hide_in_content;
        self
    }

    pub fn items(mut self, items: Vec<NavigationItem>) -> Self {
        self.items = items;
        self
    }

    pub fn make_content_section(mut self, make_content_section: bool) -> Self {
        self.make_content_section = make_content_section;
        self
    }

    pub fn make_nav_section(mut self, make_nav_section: bool) -> Self {
        self.make_nav_section = make_nav_section;
        self
    }

    /// Looks up a direct child group by name.
    pub fn group(&self, name: &str) -> Option<&NavigationNode> {
        self.items.iter()
            .filter_map(NavigationItem::as_group)
            .find(|node| node.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names of the direct children, in order.
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter()
            .map(NavigationItem::name)
            .collect()
    }
}
