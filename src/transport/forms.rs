//! Query/form field descriptors for the domain request shapes.

use crate::domain::{
    BlacklistFilters, ClicksFilters, Contact, ContactGroup, ContactListFilters, CustomField, Link,
};
use crate::transport::query::{Field, FieldValue, QueryFields};

/// A single always-present `name=value` parameter.
pub(crate) struct Param<'a>(pub &'static str, pub &'a str);

impl QueryFields for Param<'_> {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![Field::required(self.0, self.1)]
    }
}

impl QueryFields for ContactListFilters {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("offset", self.offset),
            Field::omit_empty("limit", self.limit),
            Field::omit_empty("q", self.query.as_ref()),
            Field::omit_empty("order_by", self.order_by.as_ref()),
            Field::omit_empty("phone_number", &self.phone_number),
            Field::omit_empty("email", &self.email),
            Field::omit_empty("first_name", &self.first_name),
            Field::omit_empty("last_name", &self.last_name),
            Field::omit_empty("group_id", &self.group_id),
            Field::omit_empty("gender", self.gender.as_ref()),
            Field::omit_empty("birthday_date", &self.birthday_date),
        ]
    }
}

impl QueryFields for Contact {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("id", self.id.as_ref()),
            Field::omit_empty("first_name", self.first_name.as_ref()),
            Field::omit_empty("last_name", self.last_name.as_ref()),
            Field::omit_empty("phone_number", self.phone_number.as_ref()),
            Field::omit_empty("email", self.email.as_ref()),
            Field::omit_empty("gender", self.gender.as_ref()),
            Field::omit_empty("birthday_date", self.birthday_date.as_ref()),
            Field::omit_empty("description", self.description.as_ref()),
            Field::omit_empty("city", self.city.as_ref()),
            Field::omit_empty("source", self.source.as_ref()),
            Field::omit_empty("date_created", self.date_created.as_ref()),
            Field::omit_empty("date_updated", self.date_updated.as_ref()),
        ]
    }
}

// Permissions have their own endpoints and are never sent as form fields.
impl QueryFields for ContactGroup {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("id", self.id.as_ref()),
            Field::omit_empty("name", self.name.as_ref()),
            Field::omit_empty("description", self.description.as_ref()),
            Field::omit_empty("contacts_count", self.contacts_count),
            Field::omit_empty("date_created", self.date_created.as_ref()),
            Field::omit_empty("date_updated", self.date_updated.as_ref()),
            Field::omit_empty("created_by", self.created_by.as_ref()),
            Field::omit_empty("idx", self.idx.as_ref()),
        ]
    }
}

impl QueryFields for CustomField {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("id", self.id.as_ref()),
            Field::omit_empty("name", self.name.as_ref()),
            Field::omit_empty("type", self.field_type.as_ref()),
        ]
    }
}

impl QueryFields for BlacklistFilters {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("offset", self.offset),
            Field::omit_empty("limit", self.limit),
            Field::omit_empty("q", self.query.as_ref()),
        ]
    }
}

impl QueryFields for ClicksFilters {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("date_from", self.date_from.as_ref()),
            Field::omit_empty("date_to", self.date_to.as_ref()),
            Field::omit_empty("links", &self.links),
        ]
    }
}

impl QueryFields for Link {
    fn query_fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::omit_empty("url", self.url.as_ref()),
            Field::omit_empty("name", self.name.as_ref()),
            Field::omit_empty("expire_time", self.expire_time),
            Field::omit_empty(
                "expire_unit",
                self.expire_unit.map(|it| FieldValue::from(it.as_str())),
            ),
            Field::omit_empty("description", self.description.as_ref()),
            Field::omit_empty("type", self.link_type.map(|it| FieldValue::from(it.as_str()))),
        ]
    }
}
