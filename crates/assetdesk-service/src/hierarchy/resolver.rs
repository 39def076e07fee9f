//! The approving-manager resolution algorithm.

use uuid::Uuid;

use assetdesk_core::result::AppResult;
use assetdesk_entity::employee::Employee;

use super::directory::OrgDirectory;

/// What the approver is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproverTarget {
    /// An individual employee.
    Employee(Uuid),
    /// A department as a whole.
    Department(Uuid),
}

/// Resolve the manager accountable for approving actions on `target`.
///
/// For a department the answer is the manager of the division it
/// reports into. For an employee the answer is normally the manager of
/// their department's division, with one override: when the employee
/// themselves holds a manager role and `prefer_global_for_managers` is
/// set, the organization's designated general manager takes precedence
/// and the employee's own chain is not consulted.
///
/// Absence anywhere along the chain yields `Ok(None)`, never an error.
/// A general manager resolving for themselves still resolves to
/// themselves; self-approval is not excluded here.
pub async fn resolve_manager<D>(
    dir: &mut D,
    target: ApproverTarget,
    prefer_global_for_managers: bool,
) -> AppResult<Option<Employee>>
where
    D: OrgDirectory + Send,
{
    match target {
        ApproverTarget::Department(department_id) => {
            dir.department_manager(department_id).await
        }
        ApproverTarget::Employee(employee_id) => {
            let Some(employee) = dir.employee(employee_id).await? else {
                return Ok(None);
            };

            if prefer_global_for_managers && employee.holds_manager_role() {
                if let Some(general) = dir.general_manager().await? {
                    return Ok(Some(general));
                }
                // No general manager configured: fall through to the
                // employee's own chain.
            }

            match employee.department_id {
                Some(department_id) => dir.department_manager(department_id).await,
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    /// In-memory directory for exercising the resolution rules.
    #[derive(Default)]
    struct FakeDirectory {
        employees: HashMap<Uuid, Employee>,
        department_managers: HashMap<Uuid, Employee>,
        general_manager: Option<Employee>,
    }

    #[async_trait]
    impl OrgDirectory for FakeDirectory {
        async fn employee(&mut self, id: Uuid) -> AppResult<Option<Employee>> {
            Ok(self.employees.get(&id).cloned())
        }

        async fn department_manager(
            &mut self,
            department_id: Uuid,
        ) -> AppResult<Option<Employee>> {
            Ok(self.department_managers.get(&department_id).cloned())
        }

        async fn general_manager(&mut self) -> AppResult<Option<Employee>> {
            Ok(self.general_manager.clone())
        }
    }

    fn employee(name: &str, title: &str, department_id: Option<Uuid>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: name.to_string(),
            last_name: "Example".to_string(),
            title: title.to_string(),
            is_manager: None,
            department_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_department_without_division_manager_resolves_to_none() {
        let mut dir = FakeDirectory::default();
        let department_id = Uuid::new_v4();

        let resolved = resolve_manager(&mut dir, ApproverTarget::Department(department_id), true)
            .await
            .unwrap();
        assert!(resolved.is_none());

        // After a manager is designated, the same lookup finds them.
        let manager = employee("Grace", "Division Manager", None);
        dir.department_managers.insert(department_id, manager.clone());

        let resolved = resolve_manager(&mut dir, ApproverTarget::Department(department_id), true)
            .await
            .unwrap();
        assert_eq!(resolved.unwrap().id, manager.id);
    }

    #[tokio::test]
    async fn test_manager_titled_employee_prefers_general_manager() {
        let mut dir = FakeDirectory::default();
        let department_id = Uuid::new_v4();

        let division_manager = employee("Dmitri", "Division Manager", None);
        dir.department_managers
            .insert(department_id, division_manager);

        let general = employee("Grace", "General Manager", None);
        dir.general_manager = Some(general.clone());

        let regional = employee("Rei", "Regional Manager", Some(department_id));
        dir.employees.insert(regional.id, regional.clone());

        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(regional.id), true)
            .await
            .unwrap();
        assert_eq!(resolved.unwrap().id, general.id);
    }

    #[tokio::test]
    async fn test_non_manager_always_resolves_through_own_chain() {
        let mut dir = FakeDirectory::default();
        let department_id = Uuid::new_v4();

        let division_manager = employee("Dmitri", "Division Manager", None);
        dir.department_managers
            .insert(department_id, division_manager.clone());
        dir.general_manager = Some(employee("Grace", "General Manager", None));

        let analyst = employee("Ana", "Analyst", Some(department_id));
        dir.employees.insert(analyst.id, analyst.clone());

        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(analyst.id), true)
            .await
            .unwrap();
        assert_eq!(resolved.unwrap().id, division_manager.id);
    }

    #[tokio::test]
    async fn test_prefer_flag_switches_between_general_and_chain_manager() {
        let mut dir = FakeDirectory::default();
        let department_id = Uuid::new_v4();

        let chain_manager = employee("G1", "Division Manager", None);
        dir.department_managers
            .insert(department_id, chain_manager.clone());

        let general = employee("G2", "General Manager", None);
        dir.general_manager = Some(general.clone());

        let u1 = employee("U1", "Manager", Some(department_id));
        dir.employees.insert(u1.id, u1.clone());

        let preferred = resolve_manager(&mut dir, ApproverTarget::Employee(u1.id), true)
            .await
            .unwrap();
        assert_eq!(preferred.unwrap().id, general.id);

        let chained = resolve_manager(&mut dir, ApproverTarget::Employee(u1.id), false)
            .await
            .unwrap();
        assert_eq!(chained.unwrap().id, chain_manager.id);
    }

    #[tokio::test]
    async fn test_manager_without_general_manager_falls_back_to_chain() {
        let mut dir = FakeDirectory::default();
        let department_id = Uuid::new_v4();

        let chain_manager = employee("Dmitri", "Division Manager", None);
        dir.department_managers
            .insert(department_id, chain_manager.clone());

        let manager = employee("Mika", "Manager", Some(department_id));
        dir.employees.insert(manager.id, manager.clone());

        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(manager.id), true)
            .await
            .unwrap();
        assert_eq!(resolved.unwrap().id, chain_manager.id);
    }

    #[tokio::test]
    async fn test_missing_links_resolve_to_none() {
        let mut dir = FakeDirectory::default();

        // Unknown employee.
        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(Uuid::new_v4()), true)
            .await
            .unwrap();
        assert!(resolved.is_none());

        // Employee without a department.
        let detached = employee("Drew", "Analyst", None);
        dir.employees.insert(detached.id, detached.clone());
        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(detached.id), true)
            .await
            .unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_general_manager_may_resolve_to_themselves() {
        let mut dir = FakeDirectory::default();

        let mut general = employee("Grace", "General Manager", None);
        general.is_manager = Some(true);
        dir.general_manager = Some(general.clone());
        dir.employees.insert(general.id, general.clone());

        let resolved = resolve_manager(&mut dir, ApproverTarget::Employee(general.id), true)
            .await
            .unwrap();
        assert_eq!(resolved.unwrap().id, general.id);
    }
}
