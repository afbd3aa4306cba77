use std::rc::Rc;

use crate::services::config::IntakeConfig;
use crate::services::records_api::RecordsApi;
use crate::services::scoring::{CachedNormTableSource, HttpNormTableSource, SharedNormTableSource};

/// Backend clients built once from the configuration and handed to pages
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<IntakeConfig>,
    pub records: Rc<RecordsApi>,
    pub norms: SharedNormTableSource,
}

impl AppServices {
    pub fn from_config(config: IntakeConfig) -> Self {
        let records = RecordsApi::new(&config.api.base_url);
        let norms = CachedNormTableSource::new(
            HttpNormTableSource::new(&config.scoring.norms_base_url),
            config.scoring.cache_capacity,
        );

        Self {
            config: Rc::new(config),
            records: Rc::new(records),
            norms: SharedNormTableSource::new(norms),
        }
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.records, &other.records)
            && self.norms == other.norms
    }
}
