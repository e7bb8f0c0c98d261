//! Domain models for the Staffline server

pub mod employee;

pub use employee::EmployeeRow;
pub use staffline_models::{
    Campus, CampusCategory, City, Department, Employee, EmployeeSearchRecord,
    EmployeeSearchRequest, EmployeeType, HiringMode, SearchPage, State,
};
