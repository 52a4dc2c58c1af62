/*!
# Screen Edge Collider

Keeps four thin boundary walls aligned with the edges of the visible screen
area, at a fixed depth in front of a perspective camera.

The crate is engine-agnostic: the camera, the display and the scene are
reached through small traits, and geometry is computed before anything is
created in the host scene.

## Architecture

- **FrustumRectangleProjector**: screen rectangle to four world-space corners
- **EdgeWallPlanner**: corners to TOP/RIGHT/BOTTOM/LEFT wall placements
- **CameraProvider / ScreenToWorld**: camera snapshot and projection (`Camera` is a matrix implementation)
- **DisplayProvider**: current resolution for automatic-resolution mode
- **SceneMaterializer**: creates and destroys wall objects (`WallScene` is an in-memory implementation)
- **ScreenEdgeCollider**: recompute / rollback orchestration and gizmo output
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod walls;
pub mod config;
pub mod scene;
pub mod collider;

// Main edge3d namespace module
pub mod edge3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger)
    pub use crate::engine::Engine;

    // Orchestrator and configuration
    pub use crate::collider::ScreenEdgeCollider;
    pub use crate::config::ScreenEdgeConfig;

    // Logging sub-module (types only; edge_* macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    // Camera and display providers
    pub mod camera {
        pub use crate::camera::*;
    }

    // Projection and wall planning
    pub mod walls {
        pub use crate::walls::*;
    }

    // Scene materialization
    pub mod scene {
        pub use crate::scene::*;
    }

    // Gizmo diagnostics
    pub mod gizmos {
        pub use crate::collider::{GizmoDrawer, GizmoColor};
    }
}

// Re-export math library at crate root
pub use glam;
