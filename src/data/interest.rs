use super::{blank, Profile, RecordId, Resource, ResourceCollection, ResourceKind};
use crate::{
	error::ValidationError,
	gateway::{Document, Operations, Search},
};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Interest {
	pub id: Option<RecordId>,
	pub name: String,
	pub description: String,
}

static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetInterests",
		field: "interests",
		query: "query GetInterests($search: String) { interests(search: $search) { id name description } }",
	},
	by_id: Document {
		name: "GetInterestById",
		field: "interestById",
		query: "query GetInterestById($id: Int!) { interestById(idInterest: $id) { id name description } }",
	},
	create: Document {
		name: "CreateInterest",
		field: "createInterest",
		query: "mutation CreateInterest($name: String!, $description: String!) {
			createInterest(name: $name, description: $description) { id: idInterest name description }
		}",
	},
	update: Document {
		name: "UpdateInterest",
		field: "updateInterest",
		query: "mutation UpdateInterest($id: Int!, $name: String!, $description: String!) {
			updateInterest(idInterest: $id, name: $name, description: $description) { id: idInterest name description }
		}",
	},
	delete: Document {
		name: "DeleteInterest",
		field: "deleteInterest",
		query: "mutation DeleteInterest($id: Int!) { deleteInterest(idInterest: $id) { id: idInterest } }",
	},
	search: Search::Optional,
};

impl Resource for Interest {
	const KIND: ResourceKind = ResourceKind::Interest;

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
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([("name", blank(&self.name)), ("description", blank(&self.description))])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.interests
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.interests
	}
}
