//! # Domain models for gardens, sectors, users and roles
//!
//! These are flat records mirroring the REST representations served by the
//! gardens API. They are `Serialize + Deserialize` with camelCase field names so
//! they can be sent and received as JSON without any translation layer.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Garden`] | A garden owned by a user, with its ordered list of sectors. |
//! | [`Sector`] | A planting area inside a garden, paired to a hardware centralizer through `centralizer_key`. |
//! | [`GardenAdd`] / [`GardenUpdate`] | Request bodies for creating and updating a garden. |
//! | [`Profile`] | The authenticated user's profile, including their [`Role`]. |
//! | [`User`] / [`UserPayload`] | User records managed from the admin screens. |
//! | [`PaginatedList`] | One page of results plus the total count. |

use serde::{Deserialize, Serialize};

/// Role codes understood by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleCode {
    Admin,
    GardenManager,
    Visitor,
}

impl RoleCode {
    /// Wire representation, e.g. `"GARDEN_MANAGER"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::Admin => "ADMIN",
            RoleCode::GardenManager => "GARDEN_MANAGER",
            RoleCode::Visitor => "VISITOR",
        }
    }

    /// Human readable label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            RoleCode::Admin => "Administrador",
            RoleCode::GardenManager => "Gestor de huertas",
            RoleCode::Visitor => "Visitante",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(RoleCode::Admin),
            "GARDEN_MANAGER" => Some(RoleCode::GardenManager),
            "VISITOR" => Some(RoleCode::Visitor),
            _ => None,
        }
    }

    pub fn all() -> [RoleCode; 3] {
        [RoleCode::Admin, RoleCode::GardenManager, RoleCode::Visitor]
    }
}

/// A role as returned by the roles endpoint and embedded in profiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub code: RoleCode,
    pub name: String,
}

/// The profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Profile {
    pub fn role_code(&self) -> RoleCode {
        self.role.code
    }

    /// Display name, falling back to the email when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Response of a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub profile: Profile,
    pub token: String,
    /// RFC 3339 expiry timestamp of `token`.
    pub expire: String,
}

/// A planting area inside a garden.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    /// Zero for sectors that have not been stored yet.
    #[serde(default)]
    pub sector_id: u64,
    pub name: String,
    /// Comma separated crop names, as typed in the form.
    pub crops: String,
    pub centralizer_key: String,
    #[serde(default)]
    pub garden_id: u64,
}

impl Sector {
    /// Individual crop names, trimmed, with blanks dropped.
    pub fn crop_list(&self) -> Vec<&str> {
        self.crops
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }
}

/// A garden record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub garden_id: u64,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub owner_user_id: u64,
    #[serde(default)]
    pub sectors: Vec<Sector>,
}

/// Body of `POST /gardens`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenAdd {
    pub name: String,
    pub description: String,
    pub location: String,
    pub sectors: Vec<Sector>,
}

/// Body of `PUT /gardens/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenUpdate {
    pub garden_id: u64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub sectors: Vec<Sector>,
}

/// A user as listed on the admin screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub role_code: RoleCode,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// `password` is only sent when creating a user or resetting it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role_code: RoleCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    pub list: Vec<T>,
    pub count: u64,
}

impl<T> Default for PaginatedList<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            count: 0,
        }
    }
}

impl<T> PaginatedList<T> {
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garden_uses_camel_case_on_the_wire() {
        let json = r#"{
            "gardenId": 7,
            "name": "Huerta norte",
            "description": "Frente a la escuela",
            "location": "Rosario",
            "ownerUserId": 3,
            "sectors": [
                {"sectorId": 1, "name": "A", "crops": "tomate, lechuga", "centralizerKey": "abc", "gardenId": 7}
            ]
        }"#;
        let garden: Garden = serde_json::from_str(json).unwrap();
        assert_eq!(garden.garden_id, 7);
        assert_eq!(garden.owner_user_id, 3);
        assert_eq!(garden.sectors[0].centralizer_key, "abc");
        assert_eq!(garden.sectors[0].crop_list(), vec!["tomate", "lechuga"]);
    }

    #[test]
    fn role_codes_use_screaming_snake_case() {
        let role: RoleCode = serde_json::from_str("\"GARDEN_MANAGER\"").unwrap();
        assert_eq!(role, RoleCode::GardenManager);
        assert_eq!(serde_json::to_string(&RoleCode::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(RoleCode::parse("VISITOR"), Some(RoleCode::Visitor));
        assert_eq!(RoleCode::parse("ROOT"), None);
    }

    #[test]
    fn user_payload_omits_missing_password() {
        let payload = UserPayload {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role_code: RoleCode::Visitor,
            password: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["roleCode"], "VISITOR");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let profile = Profile {
            user_id: 1,
            name: "  ".to_string(),
            email: "ana@example.com".to_string(),
            role: Role {
                code: RoleCode::Visitor,
                name: "Visitante".to_string(),
            },
        };
        assert_eq!(profile.display_name(), "ana@example.com");
    }
}
