use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::model::core_config::Config;
use crate::model::errors::DrawlyResult;
use crate::model::tutorial::{Tutorial, TutorialUpdate};
use crate::service::events::{Event, Receiver};
use crate::service::store::{SaveOutcome, StorageInfo};

/// Blocking variants of all [crate::Drawly] functions for consumers without
/// async runtimes.
#[derive(Clone)]
pub struct Drawly {
    drawly: crate::Drawly,
    rt: Arc<Runtime>,
}

impl Drawly {
    pub fn init(config: Config) -> DrawlyResult<Self> {
        let rt = Arc::new(Runtime::new().unwrap());
        let drawly = rt.block_on(crate::Drawly::init(config))?;
        Ok(Self { rt, drawly })
    }

    pub fn get_config(&self) -> Config {
        self.drawly.config.clone()
    }

    pub fn list_tutorials(&self) -> Vec<Tutorial> {
        self.rt.block_on(self.drawly.list_tutorials())
    }

    pub fn get_tutorial(&self, id: &str) -> DrawlyResult<Tutorial> {
        self.rt.block_on(self.drawly.get_tutorial(id))
    }

    pub fn add_tutorial(&self, tutorial: Tutorial) -> DrawlyResult<SaveOutcome> {
        self.rt.block_on(self.drawly.add_tutorial(tutorial))
    }

    pub fn remove_tutorial(&self, id: &str) -> DrawlyResult<SaveOutcome> {
        self.rt.block_on(self.drawly.remove_tutorial(id))
    }

    pub fn update_tutorial(&self, id: &str, patch: TutorialUpdate) -> DrawlyResult<SaveOutcome> {
        self.rt.block_on(self.drawly.update_tutorial(id, patch))
    }

    pub fn clear_all(&self) {
        self.rt.block_on(self.drawly.clear_all())
    }

    pub fn storage_info(&self) -> DrawlyResult<StorageInfo> {
        self.rt.block_on(self.drawly.storage_info())
    }

    pub fn generate_tutorial(&self, image: &str) -> DrawlyResult<Tutorial> {
        self.rt.block_on(self.drawly.generate_tutorial(image))
    }

    pub fn import_photo(&self, path: &Path) -> DrawlyResult<String> {
        self.rt.block_on(self.drawly.import_photo(path))
    }

    pub fn is_loading(&self) -> bool {
        self.drawly.is_loading()
    }

    pub fn subscribe(&self) -> Receiver<Event> {
        self.drawly.subscribe()
    }
}
