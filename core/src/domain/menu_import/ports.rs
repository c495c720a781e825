use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu_import::entities::{ImportReport, ImportSheetInput},
};

/// Service trait for the banquet-sheet CSV importer
pub trait MenuImportService: Send + Sync {
    fn import_quantity_sheet(
        &self,
        identity: Identity,
        input: ImportSheetInput,
    ) -> impl Future<Output = Result<ImportReport, CoreError>> + Send;
}
