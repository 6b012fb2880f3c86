//! Team → department hierarchy.

use std::collections::BTreeMap;

use crate::error::AllocError;

/// Maps every team to the single department it belongs to.
///
/// Department and team are free-form strings; the hierarchy between them
/// is checked once here, when records are registered, rather than
/// re-derived on every lookup.
///
/// # Examples
///
/// ```
/// use seat_alloc::model::OrgChart;
///
/// let mut org = OrgChart::new();
/// org.register("Platform", "Engineering").unwrap();
/// org.register("Platform", "Engineering").unwrap();
/// assert!(org.register("Platform", "Finance").is_err());
/// assert_eq!(org.department_of("Platform"), Some("Engineering"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgChart {
    teams: BTreeMap<String, String>,
}

impl OrgChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart from `(team, department)` pairs.
    pub fn from_pairs<I, T, D>(pairs: I) -> Result<Self, AllocError>
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        let mut org = Self::new();
        for (team, department) in pairs {
            org.register(team, department)?;
        }
        Ok(org)
    }

    /// Records that `team` belongs to `department`.
    ///
    /// Re-registering the same pair is a no-op; mapping a known team to a
    /// different department is rejected.
    pub fn register(
        &mut self,
        team: impl Into<String>,
        department: impl Into<String>,
    ) -> Result<(), AllocError> {
        let team = team.into();
        let department = department.into();
        match self.teams.get(&team) {
            Some(existing) if *existing != department => Err(AllocError::TeamDepartmentConflict {
                team,
                existing: existing.clone(),
                requested: department,
            }),
            Some(_) => Ok(()),
            None => {
                self.teams.insert(team, department);
                Ok(())
            }
        }
    }

    pub fn department_of(&self, team: &str) -> Option<&str> {
        self.teams.get(team).map(String::as_str)
    }

    /// Teams of `department`, in name order.
    pub fn teams_of(&self, department: &str) -> Vec<&str> {
        self.teams
            .iter()
            .filter(|(_, d)| d.as_str() == department)
            .map(|(t, _)| t.as_str())
            .collect()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Distinct departments, in name order.
    pub fn departments(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.teams.values().map(String::as_str).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
