//! In-memory Employee Repository
//!
//! Process-local store with the same observable behaviour as the PostgreSQL
//! repository: unique usernames, store-assigned ids, newest-first paging and
//! COALESCE-style partial updates. Used by the integration tests and by
//! `database.url = "memory"` for local runs without a database.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::services::{hash_password, DEFAULT_PASSWORD};
use crate::domain::{
    Employee, EmployeeFilter, EmployeePatch, EmployeeRepository, EmployeeStatus, NewEmployee,
    Page, PageQuery,
};
use crate::shared::error::AppError;

#[derive(Default)]
struct Store {
    rows: Vec<Employee>,
    next_id: i64,
}

/// In-memory employee repository.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    store: RwLock<Store>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the `admin` account (id 1, default password).
    pub fn with_admin() -> Self {
        let now = chrono::Utc::now();
        let admin = Employee {
            id: 1,
            username: "admin".into(),
            name: "Administrator".into(),
            password: hash_password(DEFAULT_PASSWORD),
            phone: None,
            sex: None,
            id_number: None,
            status: EmployeeStatus::Enabled,
            create_time: now,
            update_time: now,
            create_user: None,
            update_user: None,
        };

        Self {
            store: RwLock::new(Store {
                rows: vec![admin],
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.store.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_row(&self, employee: NewEmployee) -> Result<Employee, AppError> {
        let mut store = self.store.write();
        if store.rows.iter().any(|e| e.username == employee.username) {
            return Err(AppError::AlreadyExists(format!(
                "username {}",
                employee.username
            )));
        }

        store.next_id += 1;
        let row = Employee {
            id: store.next_id,
            username: employee.username,
            name: employee.name,
            password: employee.password,
            phone: employee.phone,
            sex: employee.sex,
            id_number: employee.id_number,
            status: employee.status,
            create_time: employee.create_time,
            update_time: employee.update_time,
            create_user: employee.create_user,
            update_user: employee.update_user,
        };
        store.rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Employee>, AppError> {
        Ok(self
            .store
            .read()
            .rows
            .iter()
            .find(|e| e.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        Ok(self.store.read().rows.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        self.insert_row(employee.clone())
    }

    async fn page(
        &self,
        filter: &EmployeeFilter,
        query: &PageQuery,
    ) -> Result<Page<Employee>, AppError> {
        let name = filter.name.as_deref().filter(|n| !n.is_empty());

        let mut matching: Vec<Employee> = self
            .store
            .read()
            .rows
            .iter()
            .filter(|e| name.map_or(true, |n| e.name.contains(n)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.create_time
                .cmp(&a.create_time)
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matching.len() as i64;
        let records = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();

        Ok(Page::new(total, records))
    }

    async fn update(&self, patch: &EmployeePatch) -> Result<u64, AppError> {
        let mut store = self.store.write();

        if let Some(username) = &patch.username {
            if store
                .rows
                .iter()
                .any(|e| e.id != patch.id && &e.username == username)
            {
                return Err(AppError::AlreadyExists(format!("username {}", username)));
            }
        }

        match store.rows.iter_mut().find(|e| e.id == patch.id) {
            Some(employee) => {
                patch.apply_to(employee);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
