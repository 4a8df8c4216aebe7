mod db;
mod errors;
mod handlers;
mod models;
mod repositories;
mod services;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use crate::repositories::{PgDepartmentRepository, PgEmployeeRepository, PgProjectRepository};
use crate::services::{DepartmentService, EmployeeService, ProjectService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool().await;

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", addr);

    HttpServer::new(move || {
        let departments =
            DepartmentService::new(Arc::new(PgDepartmentRepository::new(pool.clone())));
        let employees = EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool.clone())));
        let projects = ProjectService::new(Arc::new(PgProjectRepository::new(pool.clone())));

        App::new()
            .app_data(web::Data::new(departments))
            .app_data(web::Data::new(employees))
            .app_data(web::Data::new(projects))
            .configure(handlers::department::configure)
            .configure(handlers::employee::configure)
            .configure(handlers::project::configure)
    })
    .bind(addr)?
    .run()
    .await
}
