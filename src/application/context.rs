//! Request context handed explicitly to services.

/// The authenticated employee performing the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub employee_id: i64,
}

impl Actor {
    pub fn new(employee_id: i64) -> Self {
        Self { employee_id }
    }
}
