use actix_web::error::ErrorBadRequest;
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::employee::EmployeeData;
use crate::services::EmployeeService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Literal segments go before the `{id}` capture so they are matched first.
    cfg.service(
        web::resource("/empleados")
            .route(web::get().to(get_employees))
            .route(web::post().to(create_employee)),
    )
    .service(web::resource("/empleados/rango-salario").route(web::get().to(get_employees_by_salary_range)))
    .service(
        web::resource("/empleados/contratados-despues/{fecha}")
            .route(web::get().to(get_employees_hired_after)),
    )
    .service(
        web::resource("/empleados/departamento/{id}/salario-promedio")
            .route(web::get().to(get_average_salary_by_department)),
    )
    .service(
        web::resource("/empleados/departamento/{nombre}")
            .route(web::get().to(get_employees_by_department)),
    )
    .service(
        web::resource("/empleados/{id}")
            .route(web::get().to(get_employee))
            .route(web::put().to(update_employee))
            .route(web::delete().to(delete_employee)),
    );
}

#[derive(Deserialize)]
pub struct SalaryRangeQuery {
    min: Decimal,
    max: Decimal,
}

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    ErrorBadRequest(err.to_string())
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeeData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let created = service.save(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.find_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employees_by_department(
    service: web::Data<EmployeeService>,
    nombre: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.find_by_department(&nombre.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employees_by_salary_range(
    service: web::Data<EmployeeService>,
    range: web::Query<SalaryRangeQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.find_by_salary_range(range.min, range.max).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Body is the average as a JSON decimal, or `null` when the department has
/// no employees.
pub async fn get_average_salary_by_department(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let average = service.average_salary_by_department(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(average))
}

pub async fn get_employees_hired_after(
    service: web::Data<EmployeeService>,
    fecha: web::Path<NaiveDate>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.find_hired_after(fecha.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    payload: web::Json<EmployeeData>,
) -> Result<HttpResponse, actix_web::Error> {
    payload.validate().map_err(map_validation_error)?;

    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
