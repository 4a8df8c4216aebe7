use actix_web::error::ErrorBadRequest;
use actix_web::{web, HttpResponse};
use validator::{Validate, ValidationErrors};

use crate::models::project::ProjectData;
use crate::services::ProjectService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "activos" goes before the `{id}` capture so it is matched first.
    cfg.service(
        web::resource("/proyectos")
            .route(web::get().to(get_projects))
            .route(web::post().to(create_project)),
    )
    .service(web::resource("/proyectos/activos").route(web::get().to(get_active_projects)))
    .service(
        web::resource("/proyectos/{id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    ErrorBadRequest(err.to_string())
}

pub async fn create_project(
    service: web::Data<ProjectService>,
    payload: web::Json<ProjectData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let created = service.save(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_projects(
    service: web::Data<ProjectService>,
) -> Result<HttpResponse, actix_web::Error> {
    let projects = service.find_all().await?;
    Ok(HttpResponse::Ok().json(projects))
}

pub async fn get_active_projects(
    service: web::Data<ProjectService>,
) -> Result<HttpResponse, actix_web::Error> {
    let projects = service.find_active().await?;
    Ok(HttpResponse::Ok().json(projects))
}

pub async fn get_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let project = service.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

pub async fn update_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
    payload: web::Json<ProjectData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
