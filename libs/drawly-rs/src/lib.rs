//! The library that underlies drawly clients.
//!
//! Drawly turns a photo into a step-by-step drawing tutorial (a fixed
//! sequence of geometric overlay stages) and keeps a small library of those
//! tutorials on-device.
//!
//! - Most clients / integrators will be interested in the functions attached to the [Drawly]
//!   struct. See the [service] module for evolving this functionality.
//! - The [model] module contains the specification of our data structures and contracts between
//!   components.
//! - The [blocking] module contains blocking variants of all [Drawly] functions for consumers
//!   without async runtimes.
//! - The [io] module contains interactions with disk.

#[macro_use]
extern crate tracing;

pub mod blocking;
pub mod io;
pub mod model;
pub mod service;

/// The drawly service. Construct one per process with [Drawly::init] and hand
/// references to whoever needs the library; there is no hidden global.
#[derive(Clone)]
pub struct Drawly {
    pub config: Config,
    pub disk: TutorialDisk,
    pub tutorials: Arc<RwLock<Vec<Tutorial>>>,
    pub loading: Arc<AtomicBool>,
    pub events: EventSubs,
}

impl Drawly {
    #[instrument(level = "info", skip_all, err(Debug))]
    pub async fn init(config: Config) -> DrawlyResult<Self> {
        logging::init(&config)?;

        let disk = TutorialDisk::from(&config);
        let tutorials = Arc::default();
        let loading = Arc::new(AtomicBool::new(true));
        let events = EventSubs::default();

        let result = Self { config, disk, tutorials, loading, events };

        result.hydrate().await;
        result.loading.store(false, Ordering::Release);

        Ok(result)
    }
}

pub fn get_code_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

use crate::service::logging;
use io::disk::TutorialDisk;
use model::core_config::Config;
pub use model::errors::{DrawlyErrKind, DrawlyResult};
use model::tutorial::Tutorial;
use service::events::EventSubs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
