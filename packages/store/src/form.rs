//! # Form state for the create/update screens
//!
//! Each detail screen edits one of these values and, on submit, turns it into
//! the matching request body. Whether the submit adds or updates is decided by
//! [`SubmitMode::from_route`]: a route carrying an identifier edits that
//! record, anything else creates a new one.
//!
//! [`GardenForm`] also owns the sector rows of a garden. It enforces the
//! [`MAX_SECTORS`] limit and generates each new row's centralizer key exactly
//! once, when the row is added.

use rand::RngCore;
use thiserror::Error;

use crate::models::{Garden, GardenAdd, GardenUpdate, RoleCode, Sector, User, UserPayload};

/// A garden holds at most this many sectors.
pub const MAX_SECTORS: usize = 3;

/// Length in characters of a generated centralizer key.
pub const CENTRALIZER_KEY_LEN: usize = 64;

/// Message shown under an empty top-level field.
pub const REQUIRED_FIELD: &str = "Complete este campo";
/// Message shown under an empty sector field.
pub const REQUIRED_SECTOR_FIELD: &str = "Campo obligatorio";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("a garden can have at most {MAX_SECTORS} sectors")]
    TooManySectors,
    #[error("there is no sector at position {0}")]
    NoSuchSector(usize),
}

/// Whether a submit creates a record or updates an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(String),
}

impl SubmitMode {
    /// `Update` when the route carries a non-blank identifier.
    pub fn from_route(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            Some(id) if !id.is_empty() => SubmitMode::Update(id.to_string()),
            _ => SubmitMode::Create,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            SubmitMode::Create => None,
            SubmitMode::Update(id) => Some(id),
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, SubmitMode::Update(_))
    }
}

/// A validation failure attached to one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Field path, e.g. `"name"` or `"sectors.1.crops"`.
    pub field: String,
    pub message: &'static str,
}

impl FieldError {
    fn required(field: impl Into<String>, message: &'static str) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }
}

/// Message for `field` in `errors`, if any.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Random 64 character lowercase hex token.
pub fn generate_centralizer_key() -> String {
    let mut bytes = [0u8; CENTRALIZER_KEY_LEN / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// One sector row of the garden form.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorDraft {
    pub sector_id: u64,
    pub name: String,
    pub crops: String,
    centralizer_key: String,
    pub garden_id: u64,
}

impl SectorDraft {
    /// A fresh row with a newly generated centralizer key.
    pub fn new() -> Self {
        Self {
            sector_id: 0,
            name: String::new(),
            crops: String::new(),
            centralizer_key: generate_centralizer_key(),
            garden_id: 0,
        }
    }

    /// The key is read-only once the row exists.
    pub fn centralizer_key(&self) -> &str {
        &self.centralizer_key
    }

    fn to_sector(&self) -> Sector {
        Sector {
            sector_id: self.sector_id,
            name: self.name.trim().to_string(),
            crops: self.crops.trim().to_string(),
            centralizer_key: self.centralizer_key.clone(),
            garden_id: self.garden_id,
        }
    }
}

impl Default for SectorDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Sector> for SectorDraft {
    fn from(sector: &Sector) -> Self {
        Self {
            sector_id: sector.sector_id,
            name: sector.name.clone(),
            crops: sector.crops.clone(),
            centralizer_key: sector.centralizer_key.clone(),
            garden_id: sector.garden_id,
        }
    }
}

/// Editable state of the garden create/update form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenForm {
    pub name: String,
    pub description: String,
    pub location: String,
    sectors: Vec<SectorDraft>,
}

impl GardenForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sectors(&self) -> &[SectorDraft] {
        &self.sectors
    }

    pub fn can_add_sector(&self) -> bool {
        self.sectors.len() < MAX_SECTORS
    }

    /// Append an empty sector row, returning its index.
    pub fn add_sector(&mut self) -> Result<usize, FormError> {
        if !self.can_add_sector() {
            return Err(FormError::TooManySectors);
        }
        self.sectors.push(SectorDraft::new());
        Ok(self.sectors.len() - 1)
    }

    pub fn remove_sector(&mut self, index: usize) -> Result<SectorDraft, FormError> {
        if index >= self.sectors.len() {
            return Err(FormError::NoSuchSector(index));
        }
        Ok(self.sectors.remove(index))
    }

    pub fn sector_mut(&mut self, index: usize) -> Result<&mut SectorDraft, FormError> {
        self.sectors
            .get_mut(index)
            .ok_or(FormError::NoSuchSector(index))
    }

    /// Every empty required field, in display order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::required(field, REQUIRED_FIELD));
            }
        }
        for (i, sector) in self.sectors.iter().enumerate() {
            for (field, value) in [
                ("name", &sector.name),
                ("crops", &sector.crops),
                ("centralizerKey", &sector.centralizer_key),
            ] {
                if value.trim().is_empty() {
                    errors.push(FieldError::required(
                        format!("sectors.{i}.{field}"),
                        REQUIRED_SECTOR_FIELD,
                    ));
                }
            }
        }
        errors
    }

    fn sector_payload(&self) -> Vec<Sector> {
        self.sectors.iter().map(SectorDraft::to_sector).collect()
    }

    pub fn to_add(&self) -> GardenAdd {
        GardenAdd {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            sectors: self.sector_payload(),
        }
    }

    pub fn to_update(&self, garden_id: u64) -> GardenUpdate {
        GardenUpdate {
            garden_id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            sectors: self.sector_payload(),
        }
    }
}

impl From<&Garden> for GardenForm {
    fn from(garden: &Garden) -> Self {
        Self {
            name: garden.name.clone(),
            description: garden.description.clone(),
            location: garden.location.clone(),
            sectors: garden.sectors.iter().map(SectorDraft::from).collect(),
        }
    }
}

/// Editable state of the user create/update form.
#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role_code: RoleCode,
    pub password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role_code: RoleCode::Visitor,
            password: String::new(),
        }
    }
}

impl UserForm {
    /// Required fields; the password is only required when creating.
    pub fn validate(&self, mode: &SubmitMode) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::required("name", REQUIRED_FIELD));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::required("email", REQUIRED_FIELD));
        }
        if !mode.is_update() && self.password.is_empty() {
            errors.push(FieldError::required("password", REQUIRED_FIELD));
        }
        errors
    }

    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            role_code: self.role_code,
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        }
    }
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role_code: user.role_code,
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GardenForm {
        GardenForm {
            name: "Huerta norte".to_string(),
            description: "Frente a la escuela".to_string(),
            location: "Rosario".to_string(),
            ..GardenForm::default()
        }
    }

    #[test]
    fn route_id_selects_update() {
        assert_eq!(SubmitMode::from_route(None), SubmitMode::Create);
        assert_eq!(SubmitMode::from_route(Some("")), SubmitMode::Create);
        assert_eq!(
            SubmitMode::from_route(Some("12")),
            SubmitMode::Update("12".to_string())
        );
    }

    #[test]
    fn add_payload_carries_the_three_fields_and_no_sectors() {
        let add = filled().to_add();
        assert_eq!(add.name, "Huerta norte");
        assert_eq!(add.description, "Frente a la escuela");
        assert_eq!(add.location, "Rosario");
        assert!(add.sectors.is_empty());
    }

    #[test]
    fn fourth_sector_is_rejected() {
        let mut form = filled();
        for _ in 0..MAX_SECTORS {
            form.add_sector().unwrap();
        }
        assert!(!form.can_add_sector());
        assert_eq!(form.add_sector(), Err(FormError::TooManySectors));
        assert_eq!(form.sectors().len(), MAX_SECTORS);

        form.remove_sector(0).unwrap();
        assert!(form.can_add_sector());
    }

    #[test]
    fn centralizer_key_is_generated_once() {
        let mut form = filled();
        let index = form.add_sector().unwrap();
        let key = form.sectors()[index].centralizer_key().to_string();
        assert_eq!(key.len(), CENTRALIZER_KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));

        // Editing and re-reading the row, or cloning the form for a re-render,
        // keeps the same key.
        form.sector_mut(index).unwrap().name = "A".to_string();
        let rerendered = form.clone();
        assert_eq!(rerendered.sectors()[index].centralizer_key(), key);
        assert_eq!(form.to_add().sectors[index].centralizer_key, key);

        // A second row gets its own key.
        let other = form.add_sector().unwrap();
        assert_ne!(form.sectors()[other].centralizer_key(), key);
    }

    #[test]
    fn existing_sectors_keep_their_server_key() {
        let garden = Garden {
            garden_id: 5,
            sectors: vec![Sector {
                sector_id: 9,
                name: "A".to_string(),
                crops: "maiz".to_string(),
                centralizer_key: "server-key".to_string(),
                garden_id: 5,
            }],
            ..Garden::default()
        };
        let form = GardenForm::from(&garden);
        let update = form.to_update(5);
        assert_eq!(update.garden_id, 5);
        assert_eq!(update.sectors[0].centralizer_key, "server-key");
        assert_eq!(update.sectors[0].sector_id, 9);
    }

    #[test]
    fn validation_reports_empty_fields() {
        let mut form = GardenForm::new();
        form.add_sector().unwrap();
        let errors = form.validate();
        assert_eq!(error_for(&errors, "name"), Some(REQUIRED_FIELD));
        assert_eq!(error_for(&errors, "location"), Some(REQUIRED_FIELD));
        assert_eq!(error_for(&errors, "sectors.0.crops"), Some(REQUIRED_SECTOR_FIELD));
        assert_eq!(error_for(&errors, "sectors.0.centralizerKey"), None);
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn removing_missing_sector_fails() {
        let mut form = filled();
        assert_eq!(form.remove_sector(0), Err(FormError::NoSuchSector(0)));
    }

    #[test]
    fn user_password_only_required_on_create() {
        let form = UserForm {
            name: "Ana".to_string(),
            email: " Ana@Example.com ".to_string(),
            ..UserForm::default()
        };
        assert_eq!(
            error_for(&form.validate(&SubmitMode::Create), "password"),
            Some(REQUIRED_FIELD)
        );
        assert!(form.validate(&SubmitMode::Update("1".to_string())).is_empty());

        let payload = form.to_payload();
        assert_eq!(payload.email, "ana@example.com");
        assert!(payload.password.is_none());
    }
}
