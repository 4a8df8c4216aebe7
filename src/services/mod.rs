pub mod department;
pub mod employee;
pub mod project;

pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use project::ProjectService;
