//! Records exchanged with the service and the forms that produce them

pub mod dtos;
pub mod structs;

use serde::{de::DeserializeOwned, Serialize};

use crate::view::Section;

/// Path family of one entity on the records service.
///
/// The spellings (`Depatment`, mixed casing) are the service's and must not
/// be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: &'static str,
    pub get: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

impl Endpoints {
    pub fn get_path(&self, id: i64) -> String {
        format!("{}/{}", self.get, id)
    }

    pub fn delete_path(&self, id: i64) -> String {
        format!("{}/{}", self.delete, id)
    }
}

pub trait Entity: Serialize + DeserializeOwned {
    const ENDPOINTS: Endpoints;
    const SECTION: Section;
    /// Singular, lower case: "department".
    const NOUN: &'static str;
    /// Plural, lower case: "departments".
    const PLURAL: &'static str;

    fn record_id(&self) -> Option<i64>;
}
