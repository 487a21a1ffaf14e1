use super::{YearStore, load_year, new_id, save_year};
use crate::dto::contact::{CreateContactRequest, UpdateContactRequest};
use crate::error::{Result, StorageError};
use crate::models::ContactPerson;

pub struct ContactRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> ContactRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, year: i32) -> Result<Vec<ContactPerson>> {
        Ok(load_year(self.store, year).await?.contacts)
    }

    pub async fn create(&self, year: i32, req: &CreateContactRequest) -> Result<ContactPerson> {
        let mut data = load_year(self.store, year).await?;

        let contact = ContactPerson {
            id: new_id('c'),
            name: req.name.clone(),
            role: req.role.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            leg_id: req.leg_id.clone(),
        };
        data.contacts.push(contact.clone());
        save_year(self.store, &data).await?;

        tracing::info!("Added contact '{}' to GC {}", contact.id, year);
        Ok(contact)
    }

    pub async fn update(
        &self,
        year: i32,
        contact_id: &str,
        req: &UpdateContactRequest,
    ) -> Result<ContactPerson> {
        let mut data = load_year(self.store, year).await?;
        let contact = data
            .contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or_else(|| StorageError::not_found("Contact", contact_id))?;

        if let Some(name) = &req.name {
            contact.name = name.clone();
        }
        if let Some(role) = &req.role {
            contact.role = role.clone();
        }
        if let Some(email) = &req.email {
            contact.email = email.clone();
        }
        if let Some(phone) = &req.phone {
            contact.phone = Some(phone.clone());
        }
        if let Some(leg_id) = &req.leg_id {
            contact.leg_id = Some(leg_id.clone());
        }

        let updated = contact.clone();
        save_year(self.store, &data).await?;
        Ok(updated)
    }

    pub async fn delete(&self, year: i32, contact_id: &str) -> Result<()> {
        let mut data = load_year(self.store, year).await?;

        let index = data
            .contacts
            .iter()
            .position(|c| c.id == contact_id)
            .ok_or_else(|| StorageError::not_found("Contact", contact_id))?;
        data.contacts.remove(index);

        save_year(self.store, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::store_with_year;

    #[tokio::test]
    async fn test_contact_lifecycle() {
        let store = store_with_year(2026, &["Satluj", "Beas"]).await;
        let repo = ContactRepository::new(&store);

        let req = CreateContactRequest {
            name: "Asha Verma".to_string(),
            role: "Sports Secretary".to_string(),
            email: "sports@example.org".to_string(),
            phone: None,
            leg_id: Some("sports".to_string()),
        };
        let contact = repo.create(2026, &req).await.unwrap();
        assert!(contact.id.starts_with('c'));

        let update = UpdateContactRequest {
            phone: Some("+91 90000 00000".to_string()),
            ..Default::default()
        };
        let updated = repo.update(2026, &contact.id, &update).await.unwrap();
        assert_eq!(updated.name, "Asha Verma");
        assert_eq!(updated.phone.as_deref(), Some("+91 90000 00000"));

        repo.delete(2026, &contact.id).await.unwrap();
        assert!(repo.list(2026).await.unwrap().is_empty());
        assert!(repo.update(2026, &contact.id, &update).await.unwrap_err().is_not_found());
    }
}
