//! Host state
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use tabflow_core::{scene, Config, ElementId, MemoryTree, TabController, UiTree};

struct Scene {
    tree: MemoryTree,
    controller: TabController,
}

/// Element tree and controller behind one lock, so input and frame ticks
/// never interleave mid-update.
pub struct AppState {
    scene: Arc<RwLock<Scene>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut tree = scene::build_scene(&config);
        let controller = TabController::new(config, &mut tree);

        Self {
            scene: Arc::new(RwLock::new(Scene { tree, controller })),
        }
    }

    /// Resolve an element name from the root.
    pub fn find(&self, name: &str) -> Option<ElementId> {
        let scene = self.scene.read();
        scene.tree.query(scene.tree.root(), name)
    }

    pub fn click(&self, element: ElementId) -> usize {
        let mut guard = self.scene.write();
        let Scene { tree, controller } = &mut *guard;
        controller.click(tree, element)
    }

    pub fn tick(&self, dt: Duration) {
        let mut guard = self.scene.write();
        let Scene { tree, controller } = &mut *guard;
        controller.tick(tree, dt);
    }

    pub fn remove(&self, element: ElementId) {
        self.scene.write().tree.remove(element);
    }

    pub fn with_tree<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&MemoryTree) -> T,
    {
        f(&self.scene.read().tree)
    }

    pub fn with_controller<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TabController) -> T,
    {
        f(&self.scene.read().controller)
    }
}
