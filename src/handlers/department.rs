use actix_web::error::ErrorBadRequest;
use actix_web::{web, HttpResponse};
use validator::{Validate, ValidationErrors};

use crate::models::department::DepartmentData;
use crate::services::DepartmentService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/departamentos")
            .route(web::get().to(get_departments))
            .route(web::post().to(create_department)),
    )
    .service(
        web::resource("/departamentos/{id}")
            .route(web::get().to(get_department))
            .route(web::put().to(update_department))
            .route(web::delete().to(delete_department)),
    );
}

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    ErrorBadRequest(err.to_string())
}

pub async fn create_department(
    service: web::Data<DepartmentService>,
    payload: web::Json<DepartmentData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let created = service.save(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_departments(
    service: web::Data<DepartmentService>,
) -> Result<HttpResponse, actix_web::Error> {
    let departments = service.find_all().await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    service: web::Data<DepartmentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let department = service.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn update_department(
    service: web::Data<DepartmentService>,
    id: web::Path<i64>,
    payload: web::Json<DepartmentData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_department(
    service: web::Data<DepartmentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
