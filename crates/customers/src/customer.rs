use serde::{Deserialize, Serialize};

use dashboard_core::{CustomerId, DomainError, DomainResult, Entity};

/// Customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    image_url: String,
}

impl Customer {
    /// Build a customer record.
    ///
    /// Name and email are stored as given (no case folding); matching code is
    /// responsible for normalisation.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        image_url: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            email: email.into(),
            image_url: image_url.into(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Short `{id, name}` projection used by select inputs.
    pub fn field(&self) -> CustomerField {
        CustomerField {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `{id, name}` pair for customer pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerField {
    pub id: CustomerId,
    pub name: String,
}
