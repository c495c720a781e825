use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::Course, ports::CourseRepository},
};
use crate::entity::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as CourseEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresCourseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CourseRepository for PostgresCourseRepository {
    async fn create_course(&self, course: Course) -> Result<Course, CoreError> {
        let created = CourseEntity::insert(CourseActiveModel {
            id: Set(course.id),
            menu_id: Set(course.menu_id),
            name: Set(course.name),
            order: Set(course.order),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Course::from)
        .map_err(|e| {
            error!("Failed to create course: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, course_id: Uuid) -> Result<Option<Course>, CoreError> {
        let course = CourseEntity::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Course::from);

        Ok(course)
    }

    async fn get_by_menu(&self, menu_id: Uuid) -> Result<Vec<Course>, CoreError> {
        let courses = CourseEntity::find()
            .filter(CourseColumn::MenuId.eq(menu_id))
            .order_by_asc(CourseColumn::Order)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list courses for menu: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Course::from)
            .collect();

        Ok(courses)
    }

    async fn get_by_menu_and_name(
        &self,
        menu_id: Uuid,
        name: String,
    ) -> Result<Option<Course>, CoreError> {
        let course = CourseEntity::find()
            .filter(CourseColumn::MenuId.eq(menu_id))
            .filter(CourseColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(Course::from);

        Ok(course)
    }

    async fn get_all(&self) -> Result<Vec<Course>, CoreError> {
        let courses = CourseEntity::find()
            .order_by_asc(CourseColumn::Order)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list courses: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Course::from)
            .collect();

        Ok(courses)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CoreError> {
        let updated = CourseEntity::update(CourseActiveModel {
            id: Set(course.id),
            menu_id: Set(course.menu_id),
            name: Set(course.name),
            order: Set(course.order),
        })
        .filter(CourseColumn::Id.eq(course.id))
        .exec(&self.db)
        .await
        .map(Course::from)
        .map_err(|e| {
            error!("Failed to update course: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated)
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CoreError> {
        CourseEntity::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete course: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
