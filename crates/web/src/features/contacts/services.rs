use storage::{
    dto::contact::{CreateContactRequest, UpdateContactRequest},
    error::Result,
    models::ContactPerson,
    repository::{YearStore, contact::ContactRepository},
};

pub async fn list_contacts(store: &dyn YearStore, year: i32) -> Result<Vec<ContactPerson>> {
    ContactRepository::new(store).list(year).await
}

pub async fn create_contact(
    store: &dyn YearStore,
    year: i32,
    req: &CreateContactRequest,
) -> Result<ContactPerson> {
    ContactRepository::new(store).create(year, req).await
}

pub async fn update_contact(
    store: &dyn YearStore,
    year: i32,
    contact_id: &str,
    req: &UpdateContactRequest,
) -> Result<ContactPerson> {
    ContactRepository::new(store).update(year, contact_id, req).await
}

pub async fn delete_contact(store: &dyn YearStore, year: i32, contact_id: &str) -> Result<()> {
    ContactRepository::new(store).delete(year, contact_id).await
}
