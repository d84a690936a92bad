use super::latency::{Latency, Operation};
use super::table::{Placement, Record, Table};
use crate::{
    error::Result,
    model::{Customer, CustomerUpdate, NewCustomer},
    validation,
};
use chrono::{Local, NaiveDate};

impl Record for Customer {
    const KIND: &'static str = "Customer";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

pub struct CustomerRepository {
    table: Table<Customer>,
    latency: Latency,
}

impl CustomerRepository {
    pub fn new(customers: Vec<Customer>, latency: Latency) -> Self {
        Self {
            table: Table::new(customers),
            latency,
        }
    }

    pub fn list(&self) -> Vec<Customer> {
        self.latency.pause(Operation::List);
        self.table.rows().to_vec()
    }

    pub fn get(&self, id: u32) -> Result<Customer> {
        self.latency.pause(Operation::Read);
        self.table.get(id).cloned()
    }

    pub fn exists(&self, id: u32) -> bool {
        self.table.contains(id)
    }

    pub fn create(&mut self, input: NewCustomer) -> Result<Customer> {
        self.create_on(input, Local::now().date_naive())
    }

    /// Registers a customer with `customer_since` set to `today`.
    pub fn create_on(&mut self, input: NewCustomer, today: NaiveDate) -> Result<Customer> {
        self.latency.pause(Operation::Write);
        validation::validate_name(&input.name)?;
        validation::validate_email(&input.contact_email)?;
        validation::validate_acreage(input.farm_size)?;
        validation::validate_text("Notes", &input.notes)?;

        let customer = self
            .table
            .insert(input.into_customer(0, today), Placement::Back)?;
        tracing::info!(id = customer.id, name = %customer.name, "Created customer");
        Ok(customer)
    }

    pub fn update(&mut self, id: u32, update: CustomerUpdate) -> Result<Customer> {
        self.latency.pause(Operation::Write);
        if let Some(name) = &update.name {
            validation::validate_name(name)?;
        }
        if let Some(email) = &update.contact_email {
            validation::validate_email(email)?;
        }
        if let Some(size) = update.farm_size {
            validation::validate_acreage(size)?;
        }
        if let Some(notes) = &update.notes {
            validation::validate_text("Notes", notes)?;
        }

        let customer = self.table.get_mut(id)?;
        update.apply(customer);
        tracing::info!(id, name = %customer.name, "Updated customer");
        Ok(customer.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<Customer> {
        self.latency.pause(Operation::Write);
        let removed = self.table.remove(id)?;
        tracing::info!(id, name = %removed.name, "Deleted customer");
        Ok(removed)
    }

    /// Case-insensitive search over name, farm, email, city and crops.
    /// A blank query returns every customer.
    pub fn search(&self, query: &str) -> Vec<Customer> {
        self.latency.pause(Operation::List);
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.table.rows().to_vec();
        }
        let results = self.table.filter(|c| c.matches(&needle));
        tracing::debug!(query = %query, hits = results.len(), "Searched customers");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerStatus, Location};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup_repo() -> CustomerRepository {
        let mut repo = CustomerRepository::new(Vec::new(), Latency::none());
        repo.create_on(
            NewCustomer::new("Dana Whitfield")
                .with_farm_name("Prairie Gold Farms")
                .with_contact_email("dana@prairiegold.example")
                .with_location(Location {
                    city: "Ames".to_string(),
                    state: "IA".to_string(),
                    ..Default::default()
                })
                .with_primary_crops(vec!["Corn".to_string(), "Soybeans".to_string()]),
            date(2024, 1, 10),
        )
        .unwrap();
        repo.create_on(
            NewCustomer::new("Luis Ortega").with_farm_name("Valley Greens"),
            date(2024, 2, 1),
        )
        .unwrap();
        repo
    }

    #[test]
    fn test_create_assigns_id_and_defaults() {
        let repo = setup_repo();
        let customer = repo.get(2).unwrap();
        assert_eq!(customer.name, "Luis Ortega");
        assert_eq!(customer.status, CustomerStatus::Active);
        assert_eq!(customer.customer_since, date(2024, 2, 1));
    }

    #[test]
    fn test_create_requires_name() {
        let mut repo = setup_repo();
        assert!(repo.create(NewCustomer::new("  ")).is_err());
        assert_eq!(repo.list().len(), 2);
    }

    #[test]
    fn test_search_fields() {
        let repo = setup_repo();
        assert_eq!(repo.search("prairie").len(), 1);
        assert_eq!(repo.search("AMES").len(), 1);
        assert_eq!(repo.search("soy").len(), 1);
        assert_eq!(repo.search("greens")[0].id, 2);
        assert_eq!(repo.search("  ").len(), 2);
        assert!(repo.search("orchard").is_empty());
    }

    #[test]
    fn test_update_merges() {
        let mut repo = setup_repo();
        let updated = repo
            .update(
                1,
                CustomerUpdate {
                    status: Some(CustomerStatus::Inactive),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, CustomerStatus::Inactive);
        assert_eq!(updated.farm_name, "Prairie Gold Farms");
    }

    #[test]
    fn test_update_checks_notes_length() {
        let mut repo = setup_repo();
        let update = CustomerUpdate {
            notes: Some("n".repeat(validation::MAX_TEXT_LENGTH + 1)),
            ..Default::default()
        };
        assert!(repo.update(1, update).is_err());
        assert_eq!(repo.get(1).unwrap().notes, "");
    }

    #[test]
    fn test_delete_missing() {
        let mut repo = setup_repo();
        let err = repo.delete(42).unwrap_err();
        assert_eq!(err.to_string(), "Customer with ID 42 not found");
        repo.delete(1).unwrap();
        assert!(!repo.exists(1));
    }
}
