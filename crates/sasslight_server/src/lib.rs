//! sasslight_server: preview-server lifecycle orchestration.
//!
//! Decides how to bring up the live-preview server for a project: locate the
//! server bound 1:1 to the project (creating and registering one if needed),
//! then start, restart, or stop-and-restart it depending on its current
//! state and mode. Process management itself lives behind the [`Server`] and
//! [`ServerManager`] traits; this crate never spawns anything.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Type id passed to [`ServerManager::create_server`] for preview servers.
pub const PREVIEW_SERVER_TYPE_ID: &str = "sasslight.preview.server";

/// Errors surfaced by server lifecycle operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// The manager could not provision a server of the requested type.
    #[error("failed to provision server of type `{type_id}`: {reason}")]
    Provision { type_id: String, reason: String },
    /// A lifecycle transition failed.
    #[error("server `{name}` failed to {action}: {reason}")]
    Lifecycle {
        name: String,
        action: &'static str,
        reason: String,
    },
}

/// Coarse server lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Starting,
    Started,
    Stopping,
}

/// The mode a server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMode {
    Run,
    Debug,
    Profile,
}

/// A project a preview server is bound to. Two `Project` values denote the
/// same project only if both name and root path match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
    root: PathBuf,
}

impl Project {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// A single preview server instance.
pub trait Server {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);

    /// The project this server is bound to, if any.
    fn project(&self) -> Option<&Project>;
    fn bind_project(&mut self, project: Project);

    fn state(&self) -> ServerState;
    /// The mode the server was last started in.
    fn mode(&self) -> Option<ServerMode>;

    fn start(&mut self, mode: ServerMode) -> Result<(), ServerError>;
    fn stop(&mut self, force: bool) -> Result<(), ServerError>;
    fn restart(&mut self, mode: ServerMode) -> Result<(), ServerError>;
}

/// Handle to a server registered with a [`ServerManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerId(pub usize);

/// Registry of preview servers. Injected into [`run_server`]; there are no
/// process-wide singletons here.
pub trait ServerManager {
    /// Look up a registered server by name.
    fn find_server_by_name(&self, name: &str) -> Option<ServerId>;

    /// Handles of all registered servers.
    fn servers(&self) -> Vec<ServerId>;

    fn server(&self, id: ServerId) -> &dyn Server;
    fn server_mut(&mut self, id: ServerId) -> &mut dyn Server;

    /// Provision a new, unregistered server of the given type.
    fn create_server(&mut self, type_id: &str) -> Result<Box<dyn Server>, ServerError>;

    /// Register a server and return its handle.
    fn add(&mut self, server: Box<dyn Server>) -> ServerId;
}

/// Bring up the preview server for `project` in `mode`.
///
/// If the project's server is already started in the requested mode it is
/// restarted; if it is started in a different mode it is force-stopped and
/// started fresh; otherwise it is started directly.
pub fn run_server(
    manager: &mut dyn ServerManager,
    project: &Project,
    mode: ServerMode,
) -> Result<(), ServerError> {
    let id = find_or_create_server(manager, project)?;
    let server = manager.server_mut(id);

    if server.state() == ServerState::Started {
        if server.mode() == Some(mode) {
            debug!(server = server.name(), "already started in requested mode, restarting");
            return server.restart(mode);
        }
        // Started in a different mode, so stop before starting over.
        server.stop(true)?;
    }

    server.start(mode)
}

/// Locate the server bound to `project`, registering a new one if none
/// exists. A name match alone is not enough: the binding is verified
/// against the project identity.
fn find_or_create_server(
    manager: &mut dyn ServerManager,
    project: &Project,
) -> Result<ServerId, ServerError> {
    if let Some(id) = manager.find_server_by_name(project.name()) {
        if manager.server(id).project() == Some(project) {
            return Ok(id);
        }
    }
    // No server with a matching name; scan all of them for this project.
    for id in manager.servers() {
        if manager.server(id).project() == Some(project) {
            return Ok(id);
        }
    }
    add_server(manager, project)
}

/// Provision, bind, and register a server for `project`.
fn add_server(
    manager: &mut dyn ServerManager,
    project: &Project,
) -> Result<ServerId, ServerError> {
    match manager.create_server(PREVIEW_SERVER_TYPE_ID) {
        Ok(mut server) => {
            server.bind_project(project.clone());
            server.set_name(project.name().to_string());
            Ok(manager.add(server))
        }
        Err(err) => {
            error!(project = project.name(), %err, "error adding preview server for project");
            Err(err)
        }
    }
}
