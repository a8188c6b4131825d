//! Write-back of selected suggestion payloads into granular fields.
//!
//! # Responsibility
//! - Map structured record attributes onto the visible granular slots.
//! - Collapse attributes without a dedicated slot into a shared one.
//!
//! # Invariants
//! - A directly mapped attribute that is absent leaves its slot untouched.
//! - Collapsed slots are always written, possibly with an empty string.
//! - A selection without payload writes nothing.

use crate::field::store::{FieldId, FieldStore};
use crate::model::address::AddressData;
use crate::model::fullname::FullnameData;
use crate::text::joiner::{join_default, join_pair};
use serde::{Deserialize, Serialize};

/// One planned slot write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWrite {
    pub field: FieldId,
    pub value: String,
}

impl FieldWrite {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Granular slot layout that can receive one record type.
pub trait FieldDistributor {
    type Record;

    /// Granular slots in composite join order.
    fn granular(&self) -> Vec<FieldId>;

    /// Plans the slot writes for one record without touching any store.
    fn plan(&self, record: &Self::Record) -> Vec<FieldWrite>;

    /// Writes `record` into `store`; `None` is a no-op.
    ///
    /// Returns the number of slots written.
    fn distribute<S: FieldStore + ?Sized>(
        &self,
        record: Option<&Self::Record>,
        store: &mut S,
    ) -> usize {
        let Some(record) = record else {
            return 0;
        };
        let writes = self.plan(record);
        for write in &writes {
            store.write(&write.field, &write.value);
        }
        writes.len()
    }
}

/// Granular slots of an address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressFields {
    pub postal_code: FieldId,
    pub region: FieldId,
    /// Receives area, city and settlement together.
    pub city: FieldId,
    pub street: FieldId,
    pub house: FieldId,
}

impl Default for AddressFields {
    fn default() -> Self {
        Self {
            postal_code: "address-postal_code".to_string(),
            region: "address-region".to_string(),
            city: "address-city".to_string(),
            street: "address-street".to_string(),
            house: "address-house".to_string(),
        }
    }
}

impl FieldDistributor for AddressFields {
    type Record = AddressData;

    fn granular(&self) -> Vec<FieldId> {
        vec![
            self.postal_code.clone(),
            self.region.clone(),
            self.city.clone(),
            self.street.clone(),
            self.house.clone(),
        ]
    }

    fn plan(&self, address: &AddressData) -> Vec<FieldWrite> {
        let mut writes = Vec::with_capacity(5);
        if let Some(postal_code) = &address.postal_code {
            writes.push(FieldWrite::new(&self.postal_code, postal_code.as_str()));
        }
        writes.push(FieldWrite::new(
            &self.region,
            join_pair(address.region_type.as_deref(), address.region.as_deref()),
        ));
        writes.push(FieldWrite::new(
            &self.city,
            join_default([
                join_pair(address.area_type.as_deref(), address.area.as_deref()),
                join_pair(address.city_type.as_deref(), address.city.as_deref()),
                join_pair(
                    address.settlement_type.as_deref(),
                    address.settlement.as_deref(),
                ),
            ]),
        ));
        writes.push(FieldWrite::new(
            &self.street,
            join_pair(address.street_type.as_deref(), address.street.as_deref()),
        ));
        writes.push(FieldWrite::new(
            &self.house,
            join_pair(address.house_type.as_deref(), address.house.as_deref()),
        ));
        writes
    }
}

/// Granular slots of a person-name form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullnameFields {
    pub surname: FieldId,
    pub name: FieldId,
    pub patronymic: FieldId,
}

impl Default for FullnameFields {
    fn default() -> Self {
        Self {
            surname: "fullname-surname".to_string(),
            name: "fullname-name".to_string(),
            patronymic: "fullname-patronymic".to_string(),
        }
    }
}

impl FieldDistributor for FullnameFields {
    type Record = FullnameData;

    fn granular(&self) -> Vec<FieldId> {
        vec![
            self.surname.clone(),
            self.name.clone(),
            self.patronymic.clone(),
        ]
    }

    fn plan(&self, fullname: &FullnameData) -> Vec<FieldWrite> {
        [
            (&self.surname, &fullname.surname),
            (&self.name, &fullname.name),
            (&self.patronymic, &fullname.patronymic),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .as_deref()
                .map(|value| FieldWrite::new(field, value))
        })
        .collect()
    }
}
