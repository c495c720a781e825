use std::sync::Arc;

use chefco_core::application::ChefcoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChefcoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefcoService) -> Self {
        Self { args, service }
    }
}
