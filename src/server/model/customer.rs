//! Customer and customer remark domain models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::customer::{
    CreateCustomerRemarkDto, CustomerDto, CustomerRemarkDto, UpsertCustomerDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub vorname: String,
    pub strasse: String,
    pub plz: String,
    pub ort: String,
    pub telefon: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name,
            vorname: self.vorname,
            strasse: self.strasse,
            plz: self.plz,
            ort: self.ort,
            telefon: self.telefon,
            email: self.email,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            vorname: entity.vorname,
            strasse: entity.strasse,
            plz: entity.plz,
            ort: entity.ort,
            telefon: entity.telefon,
            email: entity.email,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertCustomerParam {
    pub name: String,
    pub vorname: String,
    pub strasse: String,
    pub plz: String,
    pub ort: String,
    pub telefon: String,
    pub email: String,
    pub active: bool,
}

impl From<UpsertCustomerDto> for UpsertCustomerParam {
    fn from(dto: UpsertCustomerDto) -> Self {
        Self {
            name: dto.name,
            vorname: dto.vorname,
            strasse: dto.strasse,
            plz: dto.plz,
            ort: dto.ort,
            telefon: dto.telefon,
            email: dto.email,
            active: dto.active,
        }
    }
}

/// Free-text note about a customer, e.g. lesson progress.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRemark {
    pub id: String,
    pub customer_id: String,
    pub date: NaiveDate,
    pub remarks: String,
    pub file_url: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl CustomerRemark {
    pub fn into_dto(self) -> CustomerRemarkDto {
        CustomerRemarkDto {
            id: self.id,
            customer_id: self.customer_id,
            date: self.date,
            remarks: self.remarks,
            file_url: self.file_url,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::customer_remark::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            date: entity.date,
            remarks: entity.remarks,
            file_url: entity.file_url,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCustomerRemarkParam {
    pub customer_id: String,
    pub date: NaiveDate,
    pub remarks: String,
    pub user_id: String,
}

impl CreateCustomerRemarkParam {
    pub fn from_dto(customer_id: String, user_id: String, dto: CreateCustomerRemarkDto) -> Self {
        Self {
            customer_id,
            date: dto.date,
            remarks: dto.remarks,
            user_id,
        }
    }
}
