use super::{blank, optional, Profile, RecordId, Resource, ResourceCollection, ResourceKind};
use crate::{
	error::ValidationError,
	gateway::{Document, Operations, Search},
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The identity block at the top of the resume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Header {
	pub id: Option<RecordId>,
	pub name: String,
	pub description: String,
	pub image_url: Option<String>,
	pub email: String,
	pub phone_number: Option<String>,
	pub location: Option<String>,
	pub github: Option<String>,
}

static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetHeaders",
		field: "headers",
		query: "query GetHeaders($search: String!) {
			headers(search: $search) { id name description imageUrl email phoneNumber location github }
		}",
	},
	by_id: Document {
		name: "GetHeaderById",
		field: "headerById",
		query: "query GetHeaderById($id: Int!) {
			headerById(idHeader: $id) { id name description imageUrl email phoneNumber location github }
		}",
	},
	create: Document {
		name: "CreateHeader",
		field: "createHeader",
		query: "mutation CreateHeader(
			$name: String!, $description: String!, $imageUrl: String, $email: String!,
			$phoneNumber: String, $location: String, $github: String
		) {
			createHeader(
				name: $name, description: $description, imageUrl: $imageUrl, email: $email,
				phoneNumber: $phoneNumber, location: $location, github: $github
			) { id: idHeader name description email }
		}",
	},
	update: Document {
		name: "UpdateHeader",
		field: "updateHeader",
		query: "mutation UpdateHeader(
			$id: Int!, $name: String!, $description: String!, $imageUrl: String, $email: String!,
			$phoneNumber: String, $location: String, $github: String
		) {
			updateHeader(
				idHeader: $id, name: $name, description: $description, imageUrl: $imageUrl, email: $email,
				phoneNumber: $phoneNumber, location: $location, github: $github
			) { id: idHeader name description email }
		}",
	},
	delete: Document {
		name: "DeleteHeader",
		field: "deleteHeader",
		query: "mutation DeleteHeader($id: Int!) { deleteHeader(idHeader: $id) { id: idHeader } }",
	},
	search: Search::Required,
};

impl Resource for Header {
	const KIND: ResourceKind = ResourceKind::Header;

	fn operations() -> &'static Operations {
		&OPERATIONS
	}

	fn id(&self) -> Option<RecordId> {
		self.id
	}

	fn set_id(&mut self, id: Option<RecordId>) {
		self.id = id;
	}

	fn fields(&self) -> Map<String, Value> {
		let mut fields = Map::new();
		fields.insert("name".into(), self.name.clone().into());
		fields.insert("description".into(), self.description.clone().into());
		fields.insert("imageUrl".into(), optional(&self.image_url));
		fields.insert("email".into(), self.email.clone().into());
		fields.insert("phoneNumber".into(), optional(&self.phone_number));
		fields.insert("location".into(), optional(&self.location));
		fields.insert("github".into(), optional(&self.github));
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([
			("name", blank(&self.name)),
			("description", blank(&self.description)),
			("email", blank(&self.email)),
		])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.headers
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.headers
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn absent_optionals_are_null() {
		let header = Header {
			name: "Ada".into(),
			description: "Engineer".into(),
			email: "ada@example.com".into(),
			image_url: Some(String::new()),
			github: Some("ada".into()),
			..Default::default()
		};
		let fields = Value::Object(header.fields());
		assert_eq!(
			fields,
			json!({
				"name": "Ada",
				"description": "Engineer",
				"imageUrl": null,
				"email": "ada@example.com",
				"phoneNumber": null,
				"location": null,
				"github": "ada",
			})
		);
	}

	#[test]
	fn parses_server_record() {
		let header: Header = serde_json::from_value(json!({
			"id": "3",
			"name": "Ada",
			"description": "Engineer",
			"imageUrl": null,
			"email": "ada@example.com",
			"phoneNumber": "555-0100",
			"location": null,
			"github": null,
		}))
		.unwrap();
		assert_eq!(header.id, Some(RecordId(3)));
		assert_eq!(header.phone_number.as_deref(), Some("555-0100"));
		assert_eq!(header.image_url, None);
	}
}
