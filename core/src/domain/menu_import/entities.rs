use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How to treat course-header rows that name a course the target menu
/// does not have yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseHandling {
    /// Report the missing course and skip its item rows (API upload).
    RequireExisting,
    /// Create the course with the next display order (CLI import).
    CreateMissing,
}

/// Which menu the sheet feeds into.
#[derive(Debug, Clone)]
pub enum ImportTarget {
    /// An existing menu, addressed by id.
    MenuId(Uuid),
    /// A menu addressed by name, created when absent.
    MenuName(String),
}

#[derive(Debug, Clone)]
pub struct ImportSheetInput {
    pub target: ImportTarget,
    pub data: Vec<u8>,
    pub course_handling: CourseHandling,
}

/// Aggregate outcome of one import run. Bad cells and missing courses
/// are counted and reported, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    /// Quantity references created or updated.
    pub imported: u32,
    /// Cells that failed to parse plus rows that could not be placed.
    pub errors: u32,
    pub messages: Vec<String>,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        format!(
            "Successfully imported {} quantity references with {} errors.",
            self.imported, self.errors
        )
    }
}
