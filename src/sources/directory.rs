//! In-memory employee directory.

use std::collections::HashMap;

use super::types::EmployeeDirectory;
use crate::error::AllocError;
use crate::model::{Employee, OrgChart};

/// Employees keyed by id, with the team → department hierarchy checked
/// on construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<String, Employee>,
    org: OrgChart,
}

impl InMemoryDirectory {
    /// Builds a directory, rejecting duplicate ids and any team that
    /// appears under two departments.
    pub fn new(employees: impl IntoIterator<Item = Employee>) -> Result<Self, AllocError> {
        let mut directory = Self::default();
        for employee in employees {
            directory.insert(employee)?;
        }
        Ok(directory)
    }

    pub fn insert(&mut self, employee: Employee) -> Result<(), AllocError> {
        if self.employees.contains_key(&employee.employee_id) {
            return Err(AllocError::DuplicateEmployee(employee.employee_id));
        }
        self.org
            .register(employee.team.clone(), employee.department.clone())?;
        self.employees.insert(employee.employee_id.clone(), employee);
        Ok(())
    }

    pub fn org(&self) -> &OrgChart {
        &self.org
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }
}
