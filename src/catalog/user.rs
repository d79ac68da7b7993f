use serde::{Deserialize, Serialize};

use super::{Validate, ValidationError};
use crate::patch::Assignments;
use crate::record::{Column, ColumnKind, NewRecord, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [Column] = &[
        Column::new("id", "id", ColumnKind::Id),
        Column::new("name", "name", ColumnKind::Text),
    ];

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NewRecord for NewUser {
    type Record = User;

    fn assignments(&self) -> Assignments {
        Assignments::new().with("name", "name", self.name.as_str().into())
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name must be a non-empty string"));
        }
        Ok(())
    }
}
