use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use innkeep_core::{DomainError, DomainResult, Entity, GuestId};

/// Contact fields supplied at booking time or on explicit registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Reference to an identity document (passport/licence number).
    pub id_proof: String,
}

/// A guest known to the hotel.
///
/// Guests are created explicitly, or implicitly during booking creation when
/// no record matches the supplied email. Email lookup is first-match-wins;
/// there is no uniqueness constraint on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub id_proof: String,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Register a guest from contact info.
    pub fn register(contact: ContactInfo, now: DateTime<Utc>) -> DomainResult<Self> {
        if contact.name.trim().is_empty() {
            return Err(DomainError::validation("guest name must not be empty"));
        }
        if contact.email.trim().is_empty() {
            return Err(DomainError::validation("guest email must not be empty"));
        }

        Ok(Self {
            guest_id: GuestId::new(),
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
            id_proof: contact.id_proof,
            created_at: now,
        })
    }
}

impl Entity for Guest {
    type Id = GuestId;

    fn id(&self) -> &GuestId {
        &self.guest_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Jordan Mistry".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "+91 98000 00000".to_string(),
            address: "12 Lake Road".to_string(),
            id_proof: "P1234567".to_string(),
        }
    }

    #[test]
    fn registers_guest_from_contact() {
        let guest = Guest::register(contact(), Utc::now()).unwrap();
        assert_eq!(guest.email, "jordan@example.com");
    }

    #[test]
    fn rejects_blank_name_or_email() {
        let mut c = contact();
        c.name = " ".to_string();
        assert!(Guest::register(c, Utc::now()).is_err());

        let mut c = contact();
        c.email = String::new();
        assert!(Guest::register(c, Utc::now()).is_err());
    }
}
