//! # TickTick Client
//!
//! Typed client for the TickTick Open API (projects, tasks, checklists).
//!
//! - [`ClientConfig`] resolves the access token and endpoint from defaults,
//!   an optional TOML file, and the environment.
//! - [`TickTickApi`] is the transport-agnostic interface consumed by the MCP
//!   server; [`TickTickClient`] implements it over HTTPS with `reqwest`.
//! - [`models`] holds the wire types.
//!
//! ```rust,no_run
//! use ticktick_client::{ClientConfig, TickTickApi, TickTickClient};
//!
//! # async fn example() -> ticktick_client::ClientResult<()> {
//! let config = ClientConfig::load(None, None)?;
//! let client = TickTickClient::new(&config)?;
//! for project in client.get_projects().await? {
//!     println!("{:?}", project.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{TickTickApi, TickTickClient};
pub use config::{ClientConfig, ConfigFile};
pub use error::{ClientError, ClientResult};
pub use models::{
    ChecklistItem, CreateProjectRequest, CreateTaskRequest, Priority, Project, ProjectData, Task,
    UpdateTaskRequest, ViewMode,
};
