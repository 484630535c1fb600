use super::{blank, Profile, RecordId, Resource, ResourceCollection, ResourceKind};
use crate::{
	error::ValidationError,
	gateway::{Document, Operations, Search},
};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
	pub id: Option<RecordId>,
	pub name: String,
	pub level: String,
	pub description: String,
}

static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetSkills",
		field: "skills",
		query: "query GetSkills { skills { id name level description } }",
	},
	by_id: Document {
		name: "GetSkillById",
		field: "skillById",
		query: "query GetSkillById($id: Int!) { skillById(idSkill: $id) { id name level description } }",
	},
	create: Document {
		name: "CreateSkill",
		field: "createSkill",
		query: "mutation CreateSkill($name: String!, $level: String!, $description: String!) {
			createSkill(name: $name, level: $level, description: $description) { id: idSkill name level description }
		}",
	},
	update: Document {
		name: "UpdateSkill",
		field: "updateSkill",
		query: "mutation UpdateSkill($id: Int!, $name: String!, $level: String!, $description: String!) {
			updateSkill(idSkill: $id, name: $name, level: $level, description: $description) {
				id: idSkill name level description
			}
		}",
	},
	delete: Document {
		name: "DeleteSkill",
		field: "deleteSkill",
		query: "mutation DeleteSkill($id: Int!) { deleteSkill(idSkill: $id) { id: idSkill } }",
	},
	search: Search::Unsupported,
};

impl Resource for Skill {
	const KIND: ResourceKind = ResourceKind::Skill;

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
		fields.insert("level".into(), self.level.clone().into());
		fields.insert("description".into(), self.description.clone().into());
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([
			("name", blank(&self.name)),
			("level", blank(&self.level)),
			("description", blank(&self.description)),
		])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.skills
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.skills
	}
}
