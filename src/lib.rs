//! Workspace-level tooling target. The real crates live under `crates/`.
