use super::{blank, date, iso_date, Profile, RecordId, Resource, ResourceCollection, ResourceKind};
use crate::{
	error::ValidationError,
	gateway::{Document, Operations, Search},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use time::Date;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
	pub id: Option<RecordId>,
	pub role: String,
	pub company: String,
	pub accomplishments: Vec<String>,
	#[serde(with = "iso_date::option")]
	pub start_date: Option<Date>,
	#[serde(with = "iso_date::option")]
	pub end_date: Option<Date>,
	pub location: String,
}

impl WorkExperience {
	/// Comma separated, as the editor's single text input shows it.
	pub fn accomplishments_text(&self) -> String {
		self.accomplishments.join(", ")
	}

	pub fn set_accomplishments_text(&mut self, text: &str) {
		self.accomplishments = text
			.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.map(str::to_owned)
			.collect();
	}
}

// The server has no dedicated update mutation; `createWorkExperience` updates when handed an id.
static OPERATIONS: Operations = Operations {
	list: Document {
		name: "GetAllExperiences",
		field: "experiences",
		query: "query GetAllExperiences($search: String!) {
			experiences(search: $search) { id role company accomplishments startDate endDate location }
		}",
	},
	by_id: Document {
		name: "GetExperienceById",
		field: "experienceById",
		query: "query GetExperienceById($id: Int!) {
			experienceById(idWorkExperience: $id) { id role company accomplishments startDate endDate location }
		}",
	},
	create: Document {
		name: "CreateWorkExperience",
		field: "createWorkExperience",
		query: "mutation CreateWorkExperience(
			$role: String!, $company: String!, $accomplishments: [String!]!,
			$startDate: Date!, $endDate: Date!, $location: String!
		) {
			createWorkExperience(
				role: $role, company: $company, accomplishments: $accomplishments,
				startDate: $startDate, endDate: $endDate, location: $location
			) { id: idWorkExperience role company accomplishments startDate endDate location }
		}",
	},
	update: Document {
		name: "UpdateWorkExperience",
		field: "createWorkExperience",
		query: "mutation UpdateWorkExperience(
			$id: Int!, $role: String!, $company: String!, $accomplishments: [String!]!,
			$startDate: Date!, $endDate: Date!, $location: String!
		) {
			createWorkExperience(
				idWorkExperience: $id, role: $role, company: $company, accomplishments: $accomplishments,
				startDate: $startDate, endDate: $endDate, location: $location
			) { id: idWorkExperience role company accomplishments startDate endDate location }
		}",
	},
	delete: Document {
		name: "DeleteWorkExperience",
		field: "deleteWorkExperience",
		query: "mutation DeleteWorkExperience($id: Int!) {
			deleteWorkExperience(idWorkExperience: $id) { id: idWorkExperience }
		}",
	},
	search: Search::Required,
};

impl Resource for WorkExperience {
	const KIND: ResourceKind = ResourceKind::WorkExperience;

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
		fields.insert("role".into(), self.role.clone().into());
		fields.insert("company".into(), self.company.clone().into());
		fields.insert("accomplishments".into(), self.accomplishments.clone().into());
		fields.insert("startDate".into(), date(&self.start_date));
		fields.insert("endDate".into(), date(&self.end_date));
		fields.insert("location".into(), self.location.clone().into());
		fields
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::check([
			("role", blank(&self.role)),
			("company", blank(&self.company)),
			("startDate", self.start_date.is_none()),
			("endDate", self.end_date.is_none()),
			("location", blank(&self.location)),
		])
	}

	fn collection(profile: &Profile) -> &ResourceCollection<Self> {
		&profile.work_experiences
	}

	fn collection_mut(profile: &mut Profile) -> &mut ResourceCollection<Self> {
		&mut profile.work_experiences
	}
}
