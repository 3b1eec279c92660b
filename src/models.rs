use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub sex: Sex,
    pub address: Address,
    pub settings: PersonSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub zip_code: String,
    pub city: String,
    pub line1: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSettings {
    pub locale: Locale,
}

impl Person {
    pub fn new(
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: &str,
        sex: Sex,
        address: Address,
        locale: Locale,
    ) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            sex,
            address,
            settings: PersonSettings { locale },
        }
    }
}
