//! Customer service.
//!
//! Manages driving school customers and the dated remarks kept on each of them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, customer_remark::CustomerRemarkRepository},
    error::AppError,
    model::customer::{CreateCustomerRemarkParam, Customer, CustomerRemark, UpsertCustomerParam},
};

fn customer_not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists customers by last name, then first name.
    ///
    /// # Arguments
    /// - `active` - `Some` to only return customers with that active flag
    pub async fn list(&self, active: Option<bool>) -> Result<Vec<Customer>, AppError> {
        Ok(CustomerRepository::new(self.db).get_all(active).await?)
    }

    pub async fn get(&self, customer_id: &str) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(customer_id)
            .await?
            .ok_or_else(customer_not_found)
    }

    pub async fn create(&self, param: UpsertCustomerParam) -> Result<Customer, AppError> {
        Ok(CustomerRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        customer_id: &str,
        param: UpsertCustomerParam,
    ) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .update(customer_id, param)
            .await?
            .ok_or_else(customer_not_found)
    }

    /// Deletes a customer and all of their remarks.
    pub async fn delete(&self, customer_id: &str) -> Result<(), AppError> {
        let customer_repo = CustomerRepository::new(self.db);

        if !customer_repo.exists(customer_id).await? {
            return Err(customer_not_found());
        }

        CustomerRemarkRepository::new(self.db)
            .delete_by_customer(customer_id)
            .await?;
        customer_repo.delete(customer_id).await?;

        Ok(())
    }

    /// Lists a customer's remarks, most recent first.
    pub async fn list_remarks(&self, customer_id: &str) -> Result<Vec<CustomerRemark>, AppError> {
        if !CustomerRepository::new(self.db).exists(customer_id).await? {
            return Err(customer_not_found());
        }

        Ok(CustomerRemarkRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?)
    }

    /// # Returns
    /// - `Ok(CustomerRemark)` - Created remark
    /// - `Err(AppError::NotFound)` - No customer with the remark's customer ID
    pub async fn add_remark(
        &self,
        param: CreateCustomerRemarkParam,
    ) -> Result<CustomerRemark, AppError> {
        if !CustomerRepository::new(self.db)
            .exists(&param.customer_id)
            .await?
        {
            return Err(customer_not_found());
        }

        Ok(CustomerRemarkRepository::new(self.db).create(param).await?)
    }

    pub async fn delete_remark(&self, remark_id: &str) -> Result<(), AppError> {
        if !CustomerRemarkRepository::new(self.db)
            .delete(remark_id)
            .await?
        {
            return Err(AppError::NotFound("Customer remark not found".to_string()));
        }

        Ok(())
    }
}
