use std::sync::Arc;

use crate::config::Config;
use crate::submission::recorder::RecordSink;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub recorder: Arc<dyn RecordSink>,
}
