use reqwest::Method;

use crate::client::{Context, PageIterator, SmsapiClient, SmsapiError};
use crate::domain::{Contact, ContactGroup, ContactListFilters, CustomField, GroupPermissions, Page};
use crate::transport::{RequestBody, add_query_params, path_segment};

const CONTACTS_PATH: &str = "/contacts";
const GROUPS_PATH: &str = "/contacts/groups";
const FIELDS_PATH: &str = "/contacts/fields";

/// Page-by-page walk over the contact database.
pub type ContactsIterator<'a> = PageIterator<'a, Contact>;

/// Contacts, contact groups, group permissions and custom fields (`/contacts`).
#[derive(Debug, Clone, Copy)]
pub struct ContactsApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> ContactsApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn get_contacts(
        &self,
        ctx: &Context,
        filters: &ContactListFilters,
    ) -> Result<Page<Contact>, SmsapiError> {
        let path = add_query_params(CONTACTS_PATH, filters)?;
        self.client.get(ctx, &path).await
    }

    /// Iterate over contacts matching `filters`, starting at its `offset`.
    pub fn contacts_iterator(
        &self,
        ctx: Context,
        filters: &ContactListFilters,
    ) -> ContactsIterator<'a> {
        PageIterator::new(self.client, ctx, CONTACTS_PATH, filters)
    }

    /// Create a contact from the set fields of `contact` (sent form-encoded).
    pub async fn create_contact(
        &self,
        ctx: &Context,
        contact: &Contact,
    ) -> Result<Contact, SmsapiError> {
        self.client
            .urlencoded(ctx, Method::POST, CONTACTS_PATH, contact)
            .await
    }

    pub async fn delete_all_contacts(&self, ctx: &Context) -> Result<(), SmsapiError> {
        self.client.delete(ctx, CONTACTS_PATH).await
    }

    pub async fn get_contact(&self, ctx: &Context, id: &str) -> Result<Contact, SmsapiError> {
        self.client.get(ctx, &contact_path(id)).await
    }

    pub async fn update_contact(
        &self,
        ctx: &Context,
        id: &str,
        contact: &Contact,
    ) -> Result<Contact, SmsapiError> {
        self.client.put(ctx, &contact_path(id), contact).await
    }

    pub async fn delete_contact(&self, ctx: &Context, id: &str) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &contact_path(id)).await
    }

    /// Groups the contact belongs to.
    pub async fn get_contact_groups(
        &self,
        ctx: &Context,
        contact_id: &str,
    ) -> Result<Page<ContactGroup>, SmsapiError> {
        let path = format!("{}/groups", contact_path(contact_id));
        self.client.get(ctx, &path).await
    }

    pub async fn get_contact_group(
        &self,
        ctx: &Context,
        contact_id: &str,
        group_id: &str,
    ) -> Result<ContactGroup, SmsapiError> {
        self.client
            .get(ctx, &contact_group_path(contact_id, group_id))
            .await
    }

    pub async fn bind_contact_to_group(
        &self,
        ctx: &Context,
        contact_id: &str,
        group_id: &str,
    ) -> Result<Page<ContactGroup>, SmsapiError> {
        self.client
            .put_empty(ctx, &contact_group_path(contact_id, group_id))
            .await
    }

    pub async fn unbind_contact_from_group(
        &self,
        ctx: &Context,
        contact_id: &str,
        group_id: &str,
    ) -> Result<(), SmsapiError> {
        self.client
            .delete(ctx, &contact_group_path(contact_id, group_id))
            .await
    }

    pub async fn get_groups(&self, ctx: &Context) -> Result<Page<ContactGroup>, SmsapiError> {
        self.client.get(ctx, GROUPS_PATH).await
    }

    /// Create a group from the set fields of `group` (sent form-encoded).
    pub async fn create_group(
        &self,
        ctx: &Context,
        group: &ContactGroup,
    ) -> Result<ContactGroup, SmsapiError> {
        self.client
            .urlencoded(ctx, Method::POST, GROUPS_PATH, group)
            .await
    }

    pub async fn delete_all_groups(&self, ctx: &Context) -> Result<(), SmsapiError> {
        self.client.delete(ctx, GROUPS_PATH).await
    }

    pub async fn get_group(
        &self,
        ctx: &Context,
        group_id: &str,
    ) -> Result<ContactGroup, SmsapiError> {
        self.client.get(ctx, &group_path(group_id)).await
    }

    pub async fn update_group(
        &self,
        ctx: &Context,
        group_id: &str,
        group: &ContactGroup,
    ) -> Result<ContactGroup, SmsapiError> {
        self.client.put(ctx, &group_path(group_id), group).await
    }

    pub async fn delete_group(&self, ctx: &Context, group_id: &str) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &group_path(group_id)).await
    }

    /// Make the contacts matching `filters` the only members of the group.
    pub async fn move_contacts_to_group(
        &self,
        ctx: &Context,
        group_id: &str,
        filters: &ContactListFilters,
    ) -> Result<(), SmsapiError> {
        let path = add_query_params(&members_path(group_id), filters)?;
        self.client.call(ctx, Method::PUT, &path, RequestBody::empty()).await
    }

    /// Add the contacts matching `filters` to the group.
    pub async fn add_contacts_to_group(
        &self,
        ctx: &Context,
        group_id: &str,
        filters: &ContactListFilters,
    ) -> Result<(), SmsapiError> {
        let path = add_query_params(&members_path(group_id), filters)?;
        self.client.call(ctx, Method::POST, &path, RequestBody::empty()).await
    }

    /// Remove the contacts matching `filters` from the group.
    pub async fn remove_contacts_from_group(
        &self,
        ctx: &Context,
        group_id: &str,
        filters: &ContactListFilters,
    ) -> Result<(), SmsapiError> {
        let path = add_query_params(&members_path(group_id), filters)?;
        self.client.delete(ctx, &path).await
    }

    pub async fn add_contact_to_group(
        &self,
        ctx: &Context,
        group_id: &str,
        contact_id: &str,
    ) -> Result<Contact, SmsapiError> {
        self.client
            .put_empty(ctx, &member_path(group_id, contact_id))
            .await
    }

    pub async fn get_contact_from_group(
        &self,
        ctx: &Context,
        group_id: &str,
        contact_id: &str,
    ) -> Result<Contact, SmsapiError> {
        self.client
            .get(ctx, &member_path(group_id, contact_id))
            .await
    }

    pub async fn remove_contact_from_group(
        &self,
        ctx: &Context,
        group_id: &str,
        contact_id: &str,
    ) -> Result<(), SmsapiError> {
        self.client
            .delete(ctx, &member_path(group_id, contact_id))
            .await
    }

    pub async fn get_group_permissions(
        &self,
        ctx: &Context,
        group_id: &str,
    ) -> Result<Page<GroupPermissions>, SmsapiError> {
        self.client.get(ctx, &permissions_path(group_id)).await
    }

    pub async fn add_group_permissions(
        &self,
        ctx: &Context,
        group_id: &str,
        permissions: &GroupPermissions,
    ) -> Result<GroupPermissions, SmsapiError> {
        self.client
            .post(ctx, &permissions_path(group_id), permissions)
            .await
    }

    pub async fn get_user_group_permissions(
        &self,
        ctx: &Context,
        group_id: &str,
        username: &str,
    ) -> Result<GroupPermissions, SmsapiError> {
        self.client
            .get(ctx, &user_permissions_path(group_id, username))
            .await
    }

    pub async fn add_user_group_permissions(
        &self,
        ctx: &Context,
        group_id: &str,
        username: &str,
        permissions: &GroupPermissions,
    ) -> Result<GroupPermissions, SmsapiError> {
        self.client
            .put(ctx, &user_permissions_path(group_id, username), permissions)
            .await
    }

    pub async fn remove_user_group_permissions(
        &self,
        ctx: &Context,
        group_id: &str,
        username: &str,
    ) -> Result<(), SmsapiError> {
        self.client
            .delete(ctx, &user_permissions_path(group_id, username))
            .await
    }

    pub async fn get_custom_fields(
        &self,
        ctx: &Context,
    ) -> Result<Page<CustomField>, SmsapiError> {
        self.client.get(ctx, FIELDS_PATH).await
    }

    pub async fn create_custom_field(
        &self,
        ctx: &Context,
        name: &str,
        field_type: &str,
    ) -> Result<CustomField, SmsapiError> {
        let field = CustomField {
            id: None,
            name: Some(name.to_owned()),
            field_type: Some(field_type.to_owned()),
        };
        self.client
            .urlencoded(ctx, Method::POST, FIELDS_PATH, &field)
            .await
    }

    /// Rename a custom field. The API expects `POST`, not `PUT`, here.
    pub async fn update_custom_field(
        &self,
        ctx: &Context,
        field_id: &str,
        name: &str,
    ) -> Result<CustomField, SmsapiError> {
        let field = CustomField {
            name: Some(name.to_owned()),
            ..Default::default()
        };
        self.client
            .urlencoded(ctx, Method::POST, &field_path(field_id), &field)
            .await
    }

    pub async fn delete_custom_field(
        &self,
        ctx: &Context,
        field_id: &str,
    ) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &field_path(field_id)).await
    }
}

fn contact_path(id: &str) -> String {
    format!("{CONTACTS_PATH}/{}", path_segment(id))
}

fn contact_group_path(contact_id: &str, group_id: &str) -> String {
    format!(
        "{CONTACTS_PATH}/{}/groups/{}",
        path_segment(contact_id),
        path_segment(group_id)
    )
}

fn group_path(group_id: &str) -> String {
    format!("{GROUPS_PATH}/{}", path_segment(group_id))
}

fn members_path(group_id: &str) -> String {
    format!("{}/members", group_path(group_id))
}

fn member_path(group_id: &str, contact_id: &str) -> String {
    format!("{}/{}", members_path(group_id), path_segment(contact_id))
}

fn permissions_path(group_id: &str) -> String {
    format!("{}/permissions", group_path(group_id))
}

fn user_permissions_path(group_id: &str, username: &str) -> String {
    format!("{}/{}", permissions_path(group_id), path_segment(username))
}

fn field_path(field_id: &str) -> String {
    format!("{FIELDS_PATH}/{}", path_segment(field_id))
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{FakeTransport, assert_param, make_client};

    use super::*;

    const CONTACT: &str = r#"
    {
      "id": "C1",
      "first_name": "John",
      "last_name": "Doe",
      "phone_number": "48500000000",
      "email": "john@example.com",
      "gender": "male",
      "date_created": "2020-01-01T10:00:00+01:00"
    }
    "#;

    #[tokio::test]
    async fn get_contacts_encodes_filters() {
        let transport = FakeTransport::new();
        transport.respond(200, format!(r#"{{"size": 1, "collection": [{CONTACT}]}}"#));
        let client = make_client(transport.clone());

        let filters = ContactListFilters {
            limit: 10,
            query: Some("doe".to_owned()),
            group_id: vec!["G1".to_owned(), "G2".to_owned()],
            ..Default::default()
        };
        let page = client
            .contacts()
            .get_contacts(&Context::background(), &filters)
            .await
            .unwrap();
        assert_eq!(page.size, 1);
        assert_eq!(page.collection[0].first_name.as_deref(), Some("John"));

        let request = transport.last_request();
        assert_eq!(request.path(), "/contacts");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("limit".to_owned(), "10".to_owned()),
                ("q".to_owned(), "doe".to_owned()),
                ("group_id".to_owned(), "G1".to_owned()),
                ("group_id".to_owned(), "G2".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn contacts_iterator_walks_pages() {
        let transport = FakeTransport::new();
        transport.respond(200, format!(r#"{{"size": 2, "collection": [{CONTACT}]}}"#));
        transport.respond(200, format!(r#"{{"size": 2, "collection": [{CONTACT}]}}"#));
        transport.respond(200, r#"{"size": 2, "collection": []}"#);
        let client = make_client(transport.clone());

        let filters = ContactListFilters {
            limit: 1,
            ..Default::default()
        };
        let contacts = client.contacts();
        let mut pages = contacts.contacts_iterator(Context::background(), &filters);
        assert_eq!(pages.next_page().await.unwrap().collection.len(), 1);
        assert_eq!(pages.next_page().await.unwrap().collection.len(), 1);
        // offset 2 does not exceed size 2, so one more (empty) page is fetched
        assert!(pages.next_page().await.unwrap().collection.is_empty());
        assert_param(&transport.last_request().query_pairs(), "offset", "2");

        assert!(pages.next_page().await.unwrap_err().is_no_more_results());
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn create_contact_is_form_encoded() {
        let transport = FakeTransport::new();
        transport.respond(201, CONTACT);
        let client = make_client(transport.clone());

        let contact = Contact {
            phone_number: Some("48500000000".to_owned()),
            first_name: Some("John".to_owned()),
            ..Default::default()
        };
        let created = client
            .contacts()
            .create_contact(&Context::background(), &contact)
            .await
            .unwrap();
        assert_eq!(created.id.as_deref(), Some("C1"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.content_type(), "application/x-www-form-urlencoded");
        assert_eq!(
            request.form_body(),
            vec![
                ("first_name".to_owned(), "John".to_owned()),
                ("phone_number".to_owned(), "48500000000".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn update_contact_is_json_put() {
        let transport = FakeTransport::new();
        transport.respond(200, CONTACT);
        let client = make_client(transport.clone());

        let contact = Contact {
            city: Some("Krakow".to_owned()),
            ..Default::default()
        };
        client
            .contacts()
            .update_contact(&Context::background(), "C1", &contact)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path(), "/contacts/C1");
        assert_eq!(request.content_type(), "application/json");
        assert_eq!(request.json_body(), serde_json::json!({"city": "Krakow"}));
    }

    #[tokio::test]
    async fn group_membership_commands_use_filters_as_query() {
        let transport = FakeTransport::new();
        let client = make_client(transport.clone());
        let contacts = client.contacts();
        let filters = ContactListFilters {
            phone_number: vec!["48500000000".to_owned()],
            ..Default::default()
        };
        let ctx = Context::background();

        contacts.move_contacts_to_group(&ctx, "G1", &filters).await.unwrap();
        contacts.add_contacts_to_group(&ctx, "G1", &filters).await.unwrap();
        contacts.remove_contacts_from_group(&ctx, "G1", &filters).await.unwrap();

        let requests = transport.requests();
        let methods = requests.iter().map(|it| it.method.clone()).collect::<Vec<_>>();
        assert_eq!(methods, [Method::PUT, Method::POST, Method::DELETE]);
        for request in &requests {
            assert_eq!(request.path(), "/contacts/groups/G1/members");
            assert_eq!(
                request.query_pairs(),
                vec![("phone_number".to_owned(), "48500000000".to_owned())]
            );
            assert!(request.body.is_none());
        }
    }

    #[tokio::test]
    async fn get_group_decodes_response() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"id": "G1", "name": "friends", "contacts_count": 3,
                "permissions": [{"username": "child", "read": true}]}"#,
        );
        let client = make_client(transport.clone());

        let group = client
            .contacts()
            .get_group(&Context::background(), "G1")
            .await
            .unwrap();
        assert_eq!(group.name.as_deref(), Some("friends"));
        assert_eq!(group.contacts_count, Some(3));
        assert!(group.permissions[0].read);
        assert_eq!(transport.last_request().path(), "/contacts/groups/G1");
    }

    #[tokio::test]
    async fn create_group_skips_permissions_in_form() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"id": "G1", "name": "friends"}"#);
        let client = make_client(transport.clone());

        let group = ContactGroup {
            name: Some("friends".to_owned()),
            permissions: vec![GroupPermissions::default()],
            ..Default::default()
        };
        client
            .contacts()
            .create_group(&Context::background(), &group)
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().form_body(),
            vec![("name".to_owned(), "friends".to_owned())]
        );
    }

    #[tokio::test]
    async fn user_permissions_are_addressed_by_username() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"group_id": "G1", "username": "child", "read": true, "write": true, "send": false}"#,
        );
        let client = make_client(transport.clone());

        let permissions = GroupPermissions {
            read: true,
            write: true,
            ..Default::default()
        };
        let saved = client
            .contacts()
            .add_user_group_permissions(&Context::background(), "G1", "child", &permissions)
            .await
            .unwrap();
        assert!(saved.write);

        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path(), "/contacts/groups/G1/permissions/child");
        assert_eq!(
            request.json_body(),
            serde_json::json!({"write": true, "read": true, "send": false})
        );
    }

    #[tokio::test]
    async fn custom_fields_are_form_encoded() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"id": "F1", "name": "nick", "type": "TEXT"}"#);
        transport.respond(200, r#"{"id": "F1", "name": "alias", "type": "TEXT"}"#);
        let client = make_client(transport.clone());
        let contacts = client.contacts();

        let created = contacts
            .create_custom_field(&Context::background(), "nick", "TEXT")
            .await
            .unwrap();
        assert_eq!(created.field_type.as_deref(), Some("TEXT"));
        assert_eq!(
            transport.last_request().form_body(),
            vec![
                ("name".to_owned(), "nick".to_owned()),
                ("type".to_owned(), "TEXT".to_owned()),
            ]
        );

        contacts
            .update_custom_field(&Context::background(), "F1", "alias")
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/contacts/fields/F1");
        assert_eq!(
            request.form_body(),
            vec![("name".to_owned(), "alias".to_owned())]
        );
    }
}
