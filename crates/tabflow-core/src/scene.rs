//! Default document layout
//!
//! Builds a `MemoryTree` with every element a `Config` names:
//!
//! ```text
//! root
//! ├── TabsContainer
//! │   ├── tab1 .. tabN
//! │   └── (trigger scope, e.g. tab3/topbar) → one button per popup trigger
//! ├── TabSwitcher → btn1 .. btnN → icon
//! ├── xButton
//! └── one element per popup
//! ```

use tabflow_ui::{ElementId, MemoryTree, UiTree};

use crate::config::Config;

pub fn build_scene(config: &Config) -> MemoryTree {
    let mut tree = MemoryTree::new();
    let root = tree.root();

    let container = tree.add_element(root, &config.container);
    for name in &config.tabs {
        tree.add_element(container, name);
    }

    let scope = ensure_path(&mut tree, root, &config.trigger_scope);
    for popup in &config.popups {
        tree.add_button(scope, &popup.trigger);
    }

    let nav_bar = tree.add_element(root, &config.nav_bar);
    for name in &config.nav_buttons {
        let button = tree.add_button(nav_bar, name);
        tree.add_element(button, "icon");
    }

    tree.add_button(root, &config.close_button);

    for popup in &config.popups {
        let element = tree.add_element(root, &popup.name);
        tree.add_element(element, "body");
    }

    tree
}

/// Follow `path` from `scope`, creating each missing step.
fn ensure_path(tree: &mut MemoryTree, scope: ElementId, path: &[String]) -> ElementId {
    path.iter().fold(scope, |current, name| {
        match tree.query(current, name) {
            Some(found) => found,
            None => tree.add_element(current, name),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_has_configured_elements() {
        let config = Config::default();
        let tree = build_scene(&config);
        let root = tree.root();

        let container = tree.query(root, "TabsContainer").unwrap();
        for i in 1..=5 {
            assert!(tree.query(container, &format!("tab{}", i)).is_some());
        }

        let topbar = tree.query_path(root, &config.trigger_scope).unwrap();
        assert_eq!(tree.buttons(topbar).len(), 5);

        let nav = tree.query(root, "TabSwitcher").unwrap();
        let btn1 = tree.query(nav, "btn1").unwrap();
        assert_eq!(tree.name(tree.first_child(btn1).unwrap()), Some("icon"));

        assert!(tree.query(root, "xButton").is_some());
        assert!(tree.query(root, "Stars").is_some());

        // 5 triggers, 5 nav buttons, close button
        assert_eq!(tree.buttons(root).len(), 11);
    }

    #[test]
    fn test_trigger_scope_reuses_existing_tab() {
        let config = Config::default();
        let tree = build_scene(&config);
        let container = tree.query(tree.root(), "TabsContainer").unwrap();
        let tab3 = tree.query(container, "tab3").unwrap();
        assert!(tree.query(tab3, "topbar").is_some());
        assert_eq!(tree.query(tab3, "settings"), tree.query(tree.root(), "settings"));
    }
}
